use criterion::{criterion_group, criterion_main, Criterion};
use omni_input::keys::keyboard::{KEY_A, KEY_B, KEY_C};
use omni_input::{InputState, TransitionKind, NO_POSITION};

fn churn(state: &mut InputState) {
    for _ in 0..16 {
        state.add_event(KEY_A, TransitionKind::Pressed, 1.0, NO_POSITION, NO_POSITION, None);
        state.add_event(KEY_A, TransitionKind::Updated, 0.5, NO_POSITION, NO_POSITION, None);
        state.add_event(KEY_A, TransitionKind::Released, 0.0, NO_POSITION, NO_POSITION, None);
    }
    while state.consume_pending().is_some() {}
}

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("add_update_release_drain", |b| {
        let mut state = InputState::default();
        b.iter(|| churn(&mut state));
    });

    c.bench_function("chord_just_completed", |b| {
        let mut state = InputState::default();
        state.add_event(KEY_A, TransitionKind::Pressed, 1.0, NO_POSITION, NO_POSITION, None);
        state.add_event(KEY_B, TransitionKind::Pressed, 1.0, NO_POSITION, NO_POSITION, None);
        let chord = [KEY_A, KEY_B, KEY_C];
        b.iter(|| state.chord_just_completed(&chord));
    });

    c.bench_function("is_active", |b| {
        let mut state = InputState::default();
        state.add_event(KEY_A, TransitionKind::Pressed, 1.0, NO_POSITION, NO_POSITION, None);
        b.iter(|| state.is_active(KEY_A));
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
