use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use oddsdesk_access::{accessible_roles, NavigationMap, Role};

fn navigation_filter(c: &mut Criterion) {
    let nav = NavigationMap::builtin();
    let mut group = c.benchmark_group("navigation_filter");
    for role in [Role::SubOwner, Role::Admin, Role::Agent, Role::User] {
        group.bench_function(BenchmarkId::new("for_role", role.as_str()), |b| {
            b.iter(|| black_box(nav.for_role(role)))
        });
    }
    group.finish();

    let mut group = c.benchmark_group("accessible_roles");
    for role in [Role::SubOwner, Role::MasterAgent, Role::User] {
        group.bench_function(BenchmarkId::new("list", role.as_str()), |b| {
            b.iter(|| black_box(accessible_roles(role)))
        });
    }
    group.finish();
}

criterion_group!(benches, navigation_filter);
criterion_main!(benches);
