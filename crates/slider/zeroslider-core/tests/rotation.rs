use zeroslider_core::{
    Config, HeadlessStage, RotationPhase, Slider, SwitchCause, Timeline, TimerPhase,
    TransitionTiming,
};
use proptest::collection::vec;
use proptest::prelude::*;

fn mk_timeline(slides: usize, cfg: Config) -> Timeline<HeadlessStage> {
    let slider = Slider::new(HeadlessStage::new(slides), cfg).expect("slider builds");
    Timeline::new(slider)
}

fn active(t: &Timeline<HeadlessStage>) -> Vec<usize> {
    let class = t.slider().config().active_class_name.clone();
    t.slider().stage().slides_with_class(&class)
}

#[test]
fn autorun_cycles_and_wraps() {
    let mut t = mk_timeline(3, Config::default());
    assert_eq!(active(&t), vec![0]);
    assert_eq!(t.slider().phase(), RotationPhase::Idle);
    assert_eq!(t.deadline(), Some(2000));

    t.advance(1999);
    assert_eq!(active(&t), vec![0]);

    t.advance(1);
    assert_eq!(active(&t), vec![1]);
    assert_eq!(t.slider().current_index(), 1);

    t.advance(2000);
    assert_eq!(active(&t), vec![2]);

    t.advance(2000);
    assert_eq!(active(&t), vec![0]);
    assert_eq!(t.slider().current_index(), 0);

    let events = t.slider().stage().events();
    let pairs: Vec<(usize, usize)> = events.iter().map(|e| (e.old_index, e.new_index)).collect();
    assert_eq!(pairs, vec![(0, 1), (1, 2), (2, 0)]);
    assert!(events.iter().all(|e| e.cause == SwitchCause::Auto));
}

#[test]
fn first_cycle_skips_transition_wait() {
    let stage = HeadlessStage::new(2).with_timing(TransitionTiming::new("0.5s", "0.25s"));
    let cfg = Config {
        slide_duration_ms: 1000,
        ..Config::default()
    };
    let mut t = Timeline::new(Slider::new(stage, cfg).unwrap());

    let first = t.slider().pending().expect("idle timer armed");
    assert_eq!(first.phase, TimerPhase::Idle);
    assert_eq!(first.delay_ms, 1000);

    t.advance(1000);
    assert_eq!(active(&t), vec![1]);
    assert_eq!(t.slider().phase(), RotationPhase::Transitioning);
    assert_eq!(t.deadline(), Some(1750));

    t.advance(750);
    assert_eq!(t.slider().phase(), RotationPhase::Idle);
    assert_eq!(t.deadline(), Some(2750));

    t.advance(999);
    assert_eq!(active(&t), vec![1]);
    t.advance(1);
    assert_eq!(active(&t), vec![0]);
}

#[test]
fn transition_wait_uses_the_incoming_slide() {
    let stage = HeadlessStage::new(3)
        .with_slide_timing(1, TransitionTiming::new("300ms, 1s", "0s"))
        .with_slide_timing(2, TransitionTiming::new("100ms", "0s"));
    let mut t = Timeline::new(Slider::new(stage, Config::default()).unwrap());

    t.advance(2000);
    assert_eq!(active(&t), vec![1]);
    assert_eq!(t.deadline(), Some(3000));

    t.advance(1000 + 2000);
    assert_eq!(active(&t), vec![2]);
    assert_eq!(t.deadline(), Some(5000 + 100));
}

#[test]
fn malformed_timing_does_not_stall() {
    let stage = HeadlessStage::new(2).with_timing(TransitionTiming::new("soon", "later"));
    let mut t = Timeline::new(Slider::new(stage, Config::default()).unwrap());

    t.advance(2000);
    assert_eq!(active(&t), vec![1]);
    t.advance(2000);
    assert_eq!(active(&t), vec![0]);
}

#[derive(Clone, Debug)]
enum Op {
    Next { user: bool },
    Prev { user: bool },
    Show(usize),
    Wait(u64),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<bool>().prop_map(|user| Op::Next { user }),
        any::<bool>().prop_map(|user| Op::Prev { user }),
        (0usize..16).prop_map(Op::Show),
        (0u64..3000).prop_map(Op::Wait),
    ]
}

proptest! {
    #[test]
    fn exactly_one_active_after_any_sequence(
        count in 2usize..8,
        ops in vec(op(), 0..200),
    ) {
        let mut t = mk_timeline(count, Config::default());
        for op in ops {
            match op {
                Op::Next { user } => t.with_slider(|s| s.advance(user)),
                Op::Prev { user } => t.with_slider(|s| s.retreat(user)),
                Op::Show(i) => t.with_slider(|s| s.show(i % count)).expect("in range"),
                Op::Wait(ms) => t.advance(ms),
            }
            prop_assert_eq!(active(&t), vec![t.slider().current_index()]);
        }
    }
}

#[test]
fn show_jumps_as_user_switch() {
    let mut t = mk_timeline(4, Config::default());
    t.advance(500);

    t.with_slider(|s| s.show(2)).unwrap();
    assert_eq!(active(&t), vec![2]);
    assert_eq!(t.slider().current_index(), 2);
    assert_eq!(
        t.slider().stage().slides_with_class("toggled"),
        vec![0, 1, 2, 3]
    );

    let last = *t.slider().stage().events().last().unwrap();
    assert_eq!((last.old_index, last.new_index), (0, 2));
    assert_eq!(last.cause, SwitchCause::User);

    // fresh idle cycle from the jump
    t.advance(1999);
    assert_eq!(active(&t), vec![2]);
    t.advance(1);
    assert_eq!(active(&t), vec![3]);
}

#[test]
fn show_current_slide_is_noop() {
    let mut t = mk_timeline(3, Config::default());
    let before = t.deadline();
    t.with_slider(|s| s.show(0)).unwrap();
    assert!(t.slider().stage().events().is_empty());
    assert_eq!(t.deadline(), before);
}

#[test]
fn show_out_of_range_is_an_error() {
    let mut t = mk_timeline(3, Config::default());
    let err = t.with_slider(|s| s.show(3)).unwrap_err();
    assert_eq!(
        err,
        zeroslider_core::SliderError::SlideOutOfRange { index: 3, count: 3 }
    );
    assert_eq!(active(&t), vec![0]);
}

#[test]
fn pause_holds_the_visible_slide() {
    let mut t = mk_timeline(3, Config::default());
    t.advance(500);
    t.with_slider(|s| s.pause());

    assert!(!t.slider().is_running());
    assert_eq!(t.slider().phase(), RotationPhase::Paused);
    assert_eq!(t.slider().pending(), None);

    t.advance(10_000);
    assert_eq!(active(&t), vec![0]);
    assert_eq!(t.fired(), 0);
}

#[test]
fn resume_advances_immediately() {
    let mut t = mk_timeline(3, Config::default());
    t.with_slider(|s| s.pause());
    t.advance(700);

    t.with_slider(|s| s.resume());
    assert!(t.slider().is_running());
    assert_eq!(active(&t), vec![1]);

    // no remaining countdown is restored: a full cycle follows
    t.advance(1999);
    assert_eq!(active(&t), vec![1]);
    t.advance(1);
    assert_eq!(active(&t), vec![2]);
}

#[test]
fn without_autorun_only_user_switches_move() {
    let cfg = Config {
        autorun: false,
        ..Config::default()
    };
    let mut t = mk_timeline(3, cfg);
    assert_eq!(active(&t), vec![0]);
    assert_eq!(t.slider().pending(), None);
    assert!(!t.slider().is_running());

    t.advance(10_000);
    assert_eq!(active(&t), vec![0]);

    t.with_slider(|s| s.advance(true));
    assert_eq!(active(&t), vec![1]);

    // transition + idle wait run out, then the run check stops the chain
    t.advance(5000);
    assert_eq!(active(&t), vec![1]);
    assert_eq!(t.fired(), 2);
    assert_eq!(t.slider().pending(), None);
    assert!(!t.slider().is_running());

    t.with_slider(|s| s.resume());
    assert_eq!(active(&t), vec![1]);
}
