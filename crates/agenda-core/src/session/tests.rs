//! Session and end-to-end agenda behaviour

use super::*;
use crate::draft::{ItemDraft, ItemFields};
use crate::models::ItemId;

/// Counts schedule changes instead of touching a real clock
#[derive(Debug, Default)]
struct FakeTicker {
    armed: bool,
    arms: usize,
    disarms: usize,
}

impl Ticker for FakeTicker {
    fn arm(&mut self) {
        assert!(!self.armed, "a second interval was scheduled");
        self.armed = true;
        self.arms += 1;
    }

    fn disarm(&mut self) {
        if self.armed {
            self.disarms += 1;
        }
        self.armed = false;
    }

    fn is_armed(&self) -> bool {
        self.armed
    }
}

fn session() -> Session<FakeTicker> {
    Session::new(FakeTicker::default())
}

fn add(session: &mut Session<FakeTicker>, title: &str, speaker: &str, minutes: u32) {
    session
        .dispatch(Intent::AddItem(ItemFields::new(title, speaker, minutes)))
        .unwrap();
}

fn talks() -> Session<FakeTicker> {
    let mut s = session();
    add(&mut s, "Intro", "Alice", 1);
    add(&mut s, "Talk", "Bob", 2);
    s
}

fn ticks(session: &mut Session<FakeTicker>, count: u32) {
    for _ in 0..count {
        session.dispatch(Intent::Tick).unwrap();
    }
}

fn assert_armed_iff_running(session: &Session<FakeTicker>) {
    assert_eq!(session.ticker().is_armed(), session.state().is_running());
}

#[test]
fn test_two_talk_scenario() {
    let mut s = talks();

    s.dispatch(Intent::Start).unwrap();
    assert_eq!(s.state().remaining_seconds, 60);

    ticks(&mut s, 60);
    assert_eq!(s.state().current, Some(1));
    assert_eq!(s.state().remaining_seconds, 120);
    assert!(s.state().is_running());
    assert_armed_iff_running(&s);

    ticks(&mut s, 120);
    assert!(!s.state().is_running());
    assert_eq!(s.state().current, Some(1));
    assert_eq!(s.state().remaining_seconds, 0);
    assert_eq!(s.state().phase, Phase::Finished);
    assert!(!s.ticker().is_armed());

    // Nothing ticks after the end
    assert_eq!(s.dispatch(Intent::Tick), Err(Rejection::NotRunning));
}

#[test]
fn test_empty_agenda_controls_are_no_ops() {
    let mut s = session();
    let before = s.state().clone();

    for intent in [Intent::Start, Intent::Next, Intent::Reset, Intent::SelectItem(0), Intent::Pause] {
        assert!(s.dispatch(intent).is_err());
    }
    assert_eq!(s.state(), &before);
    assert!(s.state().current.is_none());
    assert!(!s.ticker().is_armed());
}

#[test]
fn test_valid_adds_append_last() {
    let mut s = session();
    let cases = [("Intro", "Alice", "1"), ("Panel", "Bob, Carol", "45"), (" Q&A ", " Dan ", " 10 ")];
    for (i, (title, speaker, minutes)) in cases.iter().enumerate() {
        let fields = ItemDraft::new(*title, *speaker, *minutes).parse().unwrap();
        s.dispatch(Intent::AddItem(fields)).unwrap();
        assert_eq!(s.state().items.len(), i + 1);
        assert_eq!(s.state().items.last().unwrap().title, title.trim());
    }
}

#[test]
fn test_invalid_adds_leave_list_unchanged() {
    let mut s = talks();
    let before = s.state().clone();

    let drafts = [
        ItemDraft::new("", "Alice", "5"),
        ItemDraft::new("Intro", "", "5"),
        ItemDraft::new("Intro", "Alice", "0"),
        ItemDraft::new("Intro", "Alice", "-2"),
        ItemDraft::new("Intro", "Alice", "five"),
    ];
    for draft in drafts {
        assert!(draft.parse().is_err());
    }

    // Fields that skipped the draft are still checked
    let raw = ItemFields::new("Intro", "Alice", 0);
    assert!(matches!(s.dispatch(Intent::AddItem(raw)), Err(Rejection::InvalidDraft(_))));
    assert_eq!(s.state(), &before);
}

#[test]
fn test_reorder_is_a_permutation() {
    let mut base = session();
    for (i, m) in [1, 2, 3, 4, 5].iter().enumerate() {
        add(&mut base, &format!("T{}", i), "S", *m);
    }
    let original: Vec<ItemId> = base.state().items.iter().map(|item| item.id).collect();

    for from in 0..original.len() {
        for to in 0..original.len() {
            let transition = reduce(base.state(), Intent::ReorderItem { from, to }).unwrap();
            let ids: Vec<ItemId> = transition.state.items.iter().map(|item| item.id).collect();

            assert_eq!(ids[to], original[from]);
            let mut rest = ids.clone();
            rest.remove(to);
            let mut expected = original.clone();
            expected.remove(from);
            assert_eq!(rest, expected, "from {} to {}", from, to);
        }
    }
}

#[test]
fn test_delete_then_select_shifts_later_positions() {
    let mut base = session();
    for (i, m) in [1, 2, 3, 4].iter().enumerate() {
        add(&mut base, &format!("T{}", i), "S", *m);
    }

    let deleted_index = 1;
    for pos in (deleted_index + 1)..4 {
        let target = base.state().items[pos].id;
        let mut s = Session::with_state(base.state().clone(), FakeTicker::default());
        let id = s.state().items[deleted_index].id;
        s.dispatch(Intent::DeleteItem(id)).unwrap();
        s.dispatch(Intent::SelectItem(pos - 1)).unwrap();

        assert_eq!(s.state().current_item().unwrap().id, target);
        assert_eq!(s.state().remaining_seconds, s.state().current_total_seconds());
    }
}

#[test]
fn test_n_ticks_advance_exactly_once() {
    let mut s = session();
    add(&mut s, "A", "S", 2);
    add(&mut s, "B", "S", 3);
    add(&mut s, "C", "S", 1);
    s.dispatch(Intent::Start).unwrap();

    let n = s.state().remaining_seconds;
    let mut advances = 0;
    for _ in 0..n {
        let before = s.state().current;
        s.dispatch(Intent::Tick).unwrap();
        if s.state().current != before {
            advances += 1;
        }
    }
    assert_eq!(advances, 1);
    assert_eq!(s.state().current, Some(1));
    assert_eq!(s.state().remaining_seconds, 180);
}

#[test]
fn test_reset_round_trip() {
    let mut s = talks();
    add(&mut s, "Outro", "Eve", 3);

    let steps = [
        Intent::Start,
        Intent::Tick,
        Intent::Next,
        Intent::Start,
        Intent::Tick,
        Intent::ReorderItem { from: 2, to: 0 },
        Intent::Pause,
        Intent::SelectItem(2),
    ];
    for step in steps {
        let _ = s.dispatch(step);
        let mut probe = Session::with_state(s.state().clone(), FakeTicker::default());
        probe.dispatch(Intent::Reset).unwrap();
        let first = probe.state().items[0].duration_seconds();
        assert_eq!(probe.state().current, Some(0));
        assert_eq!(probe.state().remaining_seconds, first);
        assert!(!probe.state().is_running());
    }
}

#[test]
fn test_ticker_tracks_running() {
    let mut s = talks();
    let intents = [
        Intent::Start,
        Intent::Tick,
        Intent::Pause,
        Intent::Start,
        Intent::SelectItem(0),
        Intent::Start,
        Intent::Reset,
        Intent::Start,
        Intent::Next,
        Intent::Start,
    ];
    for intent in intents {
        s.dispatch(intent).unwrap();
        assert_armed_iff_running(&s);
    }
    assert_eq!(s.ticker().arms, 5);
    assert_eq!(s.ticker().disarms, 4);
}

#[test]
fn test_deleting_everything_releases_ticker() {
    let mut s = talks();
    s.dispatch(Intent::Start).unwrap();
    let ids: Vec<ItemId> = s.state().items.iter().map(|item| item.id).collect();

    s.dispatch(Intent::DeleteItem(ids[1])).unwrap();
    assert!(s.ticker().is_armed());
    s.dispatch(Intent::DeleteItem(ids[0])).unwrap();
    assert!(!s.ticker().is_armed());
    assert_eq!(s.state().phase, Phase::Idle);
}

#[test]
fn test_deleting_running_item_keeps_running_on_next() {
    let mut s = talks();
    s.dispatch(Intent::Start).unwrap();
    ticks(&mut s, 1);
    let intro = s.state().items[0].id;

    s.dispatch(Intent::DeleteItem(intro)).unwrap();
    assert_eq!(s.state().phase, Phase::Running);
    assert_eq!(s.state().current, Some(0));
    assert_eq!(s.state().current_item().unwrap().title, "Talk");
    assert_eq!(s.state().remaining_seconds, 120);
    assert!(s.ticker().is_armed());
    assert_eq!(s.ticker().arms, 1);
    assert_eq!(s.ticker().disarms, 0);

    ticks(&mut s, 1);
    assert_eq!(s.state().remaining_seconds, 119);
}

#[test]
fn test_deleting_earlier_item_while_running_keeps_running() {
    let mut s = talks();
    add(&mut s, "Panel", "Carol", 3);
    s.dispatch(Intent::SelectItem(1)).unwrap();
    s.dispatch(Intent::Start).unwrap();
    ticks(&mut s, 5);
    let intro = s.state().items[0].id;

    s.dispatch(Intent::DeleteItem(intro)).unwrap();
    assert_eq!(s.state().phase, Phase::Running);
    assert_eq!(s.state().current, Some(1));
    assert_eq!(s.state().current_item().unwrap().title, "Panel");
    assert_eq!(s.state().remaining_seconds, 180);
    assert_armed_iff_running(&s);
    assert_eq!(s.ticker().arms, 1);
    assert_eq!(s.ticker().disarms, 0);
}

#[test]
fn test_rejected_intent_keeps_ticker() {
    let mut s = talks();
    s.dispatch(Intent::Start).unwrap();
    assert_eq!(s.dispatch(Intent::Start), Err(Rejection::AlreadyRunning));
    assert!(s.ticker().is_armed());
    assert_eq!(s.ticker().arms, 1);
}

#[test]
fn test_shutdown_releases_ticker() {
    let mut s = talks();
    s.dispatch(Intent::Start).unwrap();
    s.shutdown();
    assert!(!s.ticker().is_armed());
    assert_eq!(s.ticker().disarms, 1);
}

#[test]
fn test_restored_running_state_comes_back_paused() {
    let mut s = talks();
    s.dispatch(Intent::Start).unwrap();
    s.dispatch(Intent::Tick).unwrap();

    let restored = Session::with_state(s.state().clone(), FakeTicker::default());
    assert_eq!(restored.state().phase, Phase::Paused);
    assert_eq!(restored.state().remaining_seconds, 59);
    assert!(!restored.ticker().is_armed());
}
