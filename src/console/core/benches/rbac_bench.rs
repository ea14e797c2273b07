//! Benchmarks for access policy queries and navigation transitions.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tiffin_console_core::navigation::NavigationState;
use tiffin_console_core::rbac::{map_backend_role, AccessPolicy, Role, ScreenName};

fn bench_can_access_screen(c: &mut Criterion) {
    let mut group = c.benchmark_group("can_access_screen");
    let policy = AccessPolicy::standard();

    for role in Role::all() {
        group.bench_with_input(BenchmarkId::from_parameter(role), &role, |b, &r| {
            b.iter(|| {
                for screen in ScreenName::all() {
                    black_box(policy.can_access_screen(Some(r), screen));
                }
            });
        });
    }

    group.finish();
}

fn bench_grouped_menu(c: &mut Criterion) {
    let mut group = c.benchmark_group("grouped_menu");
    let policy = AccessPolicy::standard();

    for role in [Role::Admin, Role::KitchenStaff] {
        group.bench_with_input(BenchmarkId::from_parameter(role), &role, |b, &r| {
            b.iter(|| black_box(policy.grouped_menu(Some(r))));
        });
    }

    group.finish();
}

fn bench_map_backend_role(c: &mut Criterion) {
    let mut group = c.benchmark_group("map_backend_role");

    for raw in ["ADMIN", "kitchen_staff", "superadmin"] {
        group.bench_with_input(BenchmarkId::from_parameter(raw), raw, |b, r| {
            b.iter(|| black_box(map_backend_role(r)));
        });
    }

    group.finish();
}

fn bench_navigation(c: &mut Criterion) {
    let screens = [
        ScreenName::Orders,
        ScreenName::Menus,
        ScreenName::Zones,
        ScreenName::Users,
    ];

    c.bench_function("navigate_then_back_50", |b| {
        b.iter(|| {
            let mut state = NavigationState::new(ScreenName::Dashboard, 50);
            for i in 0..50 {
                state = state.navigate(screens[i % screens.len()]);
            }
            while let Some(prev) = state.go_back() {
                state = prev;
            }
            black_box(state)
        });
    });
}

criterion_group!(
    benches,
    bench_can_access_screen,
    bench_grouped_menu,
    bench_map_backend_role,
    bench_navigation
);
criterion_main!(benches);
