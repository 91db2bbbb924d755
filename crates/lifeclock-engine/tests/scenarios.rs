use lifeclock_engine::bar::{HEAD, bar_cells};
use lifeclock_engine::{Action, AppState, DraftState, Effect, reduce, render, snapshot};
use lifeclock_testing::assertions::{
    assert_grid_shape, assert_rows_contain, bar_cells as row_cells, bar_percent,
};
use lifeclock_testing::fixtures::{at, configuration, millennium};
use lifeclock_types::{AnimationEntry, AnimationKind, EditableField, Perspective, Scale, Step};

#[test]
fn test_thirty_seconds_into_the_millennium() {
    let frame = snapshot(
        Some(millennium()),
        Perspective::Elapsed,
        false,
        at("2000-01-01T00:00:30"),
    );
    let rows = frame.grid.rows();
    assert_grid_shape(&rows).unwrap();

    let minute = &rows[14];
    assert!(minute.contains(" MINUTE[30/60] SEC |"), "{minute}");
    // 29 of 59 steps: head in cell 29
    let cells = row_cells(minute).unwrap();
    assert_eq!(cells.chars().position(|c| c == HEAD), Some(29));
    assert_eq!(bar_percent(minute).unwrap(), 49);
}

#[test]
fn test_day_crossing_starts_day_animation() {
    for (perspective, kind) in [
        (Perspective::Elapsed, AnimationKind::Grow),
        (Perspective::Remaining, AnimationKind::Shrink),
    ] {
        let mut state = AppState::new(Some(millennium()), at("2000-01-01T23:59:59"));
        state.perspective = perspective;
        let (state, _) = reduce(state, Action::Tick(at("2000-01-02T00:00:00")));

        assert_eq!(
            state.tick.animation(Scale::Day),
            Some(AnimationEntry::start(kind, at("2000-01-01T23:59:59")))
        );
        assert_eq!(
            state.tick.animation(Scale::Month),
            Some(AnimationEntry::start(kind, at("2000-01-01T23:59:59")))
        );
        assert!(state.tick.animation(Scale::Year).is_none());
    }
}

#[test]
fn test_day_bar_slides_in_after_midnight() {
    let state = AppState::new(Some(millennium()), at("2000-01-01T23:59:59.950"));
    let (mut state, _) = reduce(state, Action::Tick(at("2000-01-02T00:00:00.050")));

    let mut day_rows = Vec::new();
    for tick in 1..=5 {
        day_rows.push(render(&state).grid.row(16).unwrap());
        let now = at("2000-01-02T00:00:00.050") + chrono::TimeDelta::milliseconds(100 * tick);
        state = reduce(state, Action::Tick(now)).0;
    }
    assert!(state.tick.animation(Scale::Day).is_none());

    let resting = render(&state).grid.row(16).unwrap();
    assert_eq!(day_rows.last(), Some(&resting));
}

/// Head column inside the bar on `row` for the tick at `before`, the five
/// animated frames after `crossing`, and the resting tick that follows
fn head_trail(perspective: Perspective, before: &str, crossing: &str, row: usize) -> Vec<usize> {
    let head = |state: &AppState| {
        let line = render(state).grid.row(row).unwrap();
        row_cells(&line).unwrap().chars().position(|c| c == HEAD).unwrap()
    };
    let mut state = AppState::new(Some(millennium()), at(before));
    state.perspective = perspective;
    let mut heads = vec![head(&state)];
    let (mut state, _) = reduce(state, Action::Tick(at(crossing)));
    for tick in 1..=5 {
        heads.push(head(&state));
        let now = at(crossing) + chrono::TimeDelta::milliseconds(100 * tick);
        state = reduce(state, Action::Tick(now)).0;
    }
    assert!(state.tick.animations.is_empty());
    heads.push(head(&state));
    heads
}

#[test]
fn test_day_head_starts_where_previous_tick_left_it() {
    let before = "2023-03-01T05:59:59.950";
    let crossing = "2023-03-01T06:00:00.050";
    assert_eq!(
        head_trail(Perspective::Elapsed, before, crossing, 16),
        vec![14; 7]
    );
    assert_eq!(
        head_trail(Perspective::Remaining, before, crossing, 16),
        vec![14, 14, 14, 15, 15, 15, 15]
    );
}

#[test]
fn test_year_head_holds_when_month_turns_inside_a_cell() {
    let before = "2023-02-28T23:59:59.950";
    let crossing = "2023-03-01T00:00:00.050";
    for perspective in [Perspective::Elapsed, Perspective::Remaining] {
        assert_eq!(head_trail(perspective, before, crossing, 21), vec![9; 7]);
    }
}

#[test]
fn test_year_head_slides_forward_into_next_cell() {
    // Jan 31 is day 30 of 365 (cell 4); Feb 1 is day 31 (cell 5)
    let before = "2023-01-31T23:59:59.950";
    let crossing = "2023-02-01T00:00:00.050";
    for perspective in [Perspective::Elapsed, Perspective::Remaining] {
        assert_eq!(
            head_trail(perspective, before, crossing, 21),
            vec![4, 4, 4, 5, 5, 5, 5]
        );
    }
}

#[test]
fn test_month_wraps_on_adjust() {
    let mut state = AppState::new(None, at("2000-01-01T00:00:00"));
    state.editor = Some(DraftState {
        month: 12,
        active_field: EditableField::Month,
        ..DraftState::default()
    });
    let (state, _) = reduce(state, Action::Adjust(Step::Up));
    let draft = state.editor.unwrap();
    assert_eq!(draft.month, 1);
    assert_eq!(draft.active_field, EditableField::Month);
}

#[test]
fn test_leap_day_survives_confirm_and_reopen() {
    let mut state = AppState::new(None, at("2030-06-01T12:00:00"));
    state.editor = Some(DraftState {
        year: 2028,
        month: 2,
        day: 29,
        duration_years: 80,
        active_field: EditableField::Year,
    });
    let (state, effect) = reduce(state, Action::Confirm);
    assert_eq!(effect, Some(Effect::Persist(configuration(2028, 2, 29, 80))));

    let (state, _) = reduce(state, Action::OpenEditor);
    let draft = state.editor.unwrap();
    assert_eq!(
        (draft.year, draft.month, draft.day, draft.duration_years),
        (2028, 2, 29, 80)
    );
}

#[test]
fn test_typing_a_birth_date_from_scratch() {
    let state = AppState::new(None, at("2024-05-10T08:00:00"));
    let actions = [
        Action::Backspace,
        Action::Backspace,
        Action::Backspace,
        Action::Backspace,
        Action::Digit(1),
        Action::Digit(9),
        Action::Digit(8),
        Action::Digit(5),
        Action::FocusNext,
        Action::Backspace,
        Action::Digit(7),
        Action::FocusNext,
        Action::Backspace,
        Action::Digit(1),
        Action::Digit(4),
        Action::FocusNext,
        Action::Adjust(Step::Up),
        Action::Confirm,
    ];
    let (state, effect) = actions
        .into_iter()
        .fold((state, None), |(state, _), action| reduce(state, action));

    assert_eq!(effect, Some(Effect::Persist(configuration(1985, 7, 14, 81))));
    assert!(!state.is_editing());

    let rows = render(&state).grid.rows();
    assert_rows_contain(&rows, &["LIFE CLOCK :: BORN 1985/07/14", "LIFE[38/81] YRS"]).unwrap();
}

#[test]
fn test_toggle_mirrors_every_bar() {
    let config = configuration(1990, 6, 15, 80);
    let now = at("2024-05-10T08:30:15");
    let elapsed = snapshot(Some(config), Perspective::Elapsed, false, now).grid.rows();
    let remaining = snapshot(Some(config), Perspective::Remaining, false, now).grid.rows();

    for row in [15, 16, 20, 21, 22] {
        let e = row_cells(&elapsed[row]).unwrap();
        let r = row_cells(&remaining[row]).unwrap();
        assert_ne!(e, r);
        let total = bar_percent(&elapsed[row]).unwrap() + bar_percent(&remaining[row]).unwrap();
        assert!((99..=101).contains(&total), "row {row}: {total}");
    }
    assert!(remaining[25].contains("[ REMAINING ]"));
    assert!(remaining[1].contains("LIFE CLOCK :: EOL 2070/06/15"));
}

#[test]
fn test_bar_cells_match_row_text() {
    let frame = snapshot(Some(millennium()), Perspective::Elapsed, false, at("2000-01-01T06:00:00"));
    let derived = lifeclock_engine::derive(Some(&millennium()), at("2000-01-01T06:00:00"));
    let day = derived.bar(Scale::Day).unwrap();
    let expected = bar_cells(day, Perspective::Elapsed, None, false);
    assert_eq!(row_cells(&frame.grid.row(16).unwrap()).unwrap(), expected);
}
