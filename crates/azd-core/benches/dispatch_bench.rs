use azd_core::{Arity, CommandSpec, Dispatcher, RootSpec};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn build() -> Dispatcher {
    let mut dispatcher = Dispatcher::new(RootSpec::new("azd", "Azure Developer CLI"));
    for name in ["deploy", "init", "provision", "custom", "integrate", "monitor", "analyze"] {
        dispatcher.register(
            CommandSpec::new(name, |_| Ok(()))
                .arg("target")
                .arity(Arity::Exact(1)),
        );
    }
    dispatcher
}

fn bench_dispatch(c: &mut Criterion) {
    let dispatcher = build();

    c.bench_function("dispatch_last_registered", |b| {
        b.iter(|| dispatcher.execute(black_box(["analyze", "storage"])))
    });

    c.bench_function("dispatch_arity_rejection", |b| {
        b.iter(|| dispatcher.execute(black_box(["deploy"])).is_err())
    });
}

criterion_group!(benches, bench_dispatch);
criterion_main!(benches);
