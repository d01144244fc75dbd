use pretty_assertions::assert_eq;
use puzzle_editor::{CommitPolicy, SlotAssignment};
use puzzle_model::validation::{DUPLICATE_NOTICE, SELF_PRODUCTION_NOTICE};
use puzzle_model::{Recipe, RecipeSlot, RecipeViolation};
use puzzle_test_utils::{document_with, id, recipe, session_with};

#[test]
fn empty_slot_writes_never_alert() {
    let (mut session, notifier) = session_with(document_with(3, &[]), CommitPolicy::CommitFlagged);
    session.add_recipe();

    for (slot, object) in [(RecipeSlot::First, "0"), (RecipeSlot::Result, "0")] {
        session.select_object(id(object)).unwrap();
        assert_eq!(session.assign_slot(0, slot).unwrap(), SlotAssignment::Incomplete);
    }
    assert!(notifier.notices().is_empty());
}

#[test]
fn completing_with_ingredient_as_result_flags_self_production() {
    for result in ["0", "1"] {
        let doc = document_with(3, &[Recipe::empty()]);
        let (mut session, notifier) = session_with(doc, CommitPolicy::CommitFlagged);

        for (slot, object) in [
            (RecipeSlot::First, "0"),
            (RecipeSlot::Second, "1"),
            (RecipeSlot::Result, result),
        ] {
            session.select_object(id(object)).unwrap();
            session.assign_slot(0, slot).unwrap();
        }

        assert_eq!(notifier.notices(), vec![SELF_PRODUCTION_NOTICE.to_string()]);
        assert_eq!(
            session.violations(),
            vec![RecipeViolation::SelfProduction { recipe: 0 }]
        );
    }
}

#[test]
fn mirrored_pair_flags_duplicate_but_different_pair_does_not() {
    // [0,1] vs [1,0]
    let doc = document_with(4, &[recipe("0", "1", "2"), Recipe::empty()]);
    let (mut session, notifier) = session_with(doc, CommitPolicy::CommitFlagged);
    for (slot, object) in [
        (RecipeSlot::First, "1"),
        (RecipeSlot::Second, "0"),
        (RecipeSlot::Result, "3"),
    ] {
        session.select_object(id(object)).unwrap();
        session.assign_slot(1, slot).unwrap();
    }
    assert_eq!(notifier.notices(), vec![DUPLICATE_NOTICE.to_string()]);

    // [0,1] vs [0,2]
    let doc = document_with(4, &[recipe("0", "1", "3"), Recipe::empty()]);
    let (mut session, notifier) = session_with(doc, CommitPolicy::CommitFlagged);
    for (slot, object) in [
        (RecipeSlot::First, "0"),
        (RecipeSlot::Second, "2"),
        (RecipeSlot::Result, "3"),
    ] {
        session.select_object(id(object)).unwrap();
        session.assign_slot(1, slot).unwrap();
    }
    assert!(notifier.notices().is_empty());
}

#[test]
fn selected_object_lands_in_slot_then_selection_clears() {
    let doc = document_with(3, &[Recipe::empty()]);
    let (mut session, _) = session_with(doc, CommitPolicy::CommitFlagged);

    session.select_object(id("2")).unwrap();
    session.assign_slot(0, RecipeSlot::Second).unwrap();

    let written = &session.document().recipes()[0];
    assert_eq!(written.get(RecipeSlot::Second), Some(&id("2")));
    assert_eq!(written.get(RecipeSlot::First), None);
    assert_eq!(written.get(RecipeSlot::Result), None);
    assert_eq!(session.selection(), None);
}

#[test]
fn one_document_change_per_assignment() {
    let doc = document_with(3, &[Recipe::empty()]);
    let (mut session, _) = session_with(doc, CommitPolicy::CommitFlagged);
    let mut expected = session.revision();
    for (slot, object) in [
        (RecipeSlot::First, "0"),
        (RecipeSlot::Second, "0"),
        (RecipeSlot::Result, "0"),
    ] {
        session.select_object(id(object)).unwrap();
        session.assign_slot(0, slot).unwrap();
        expected += 1;
        assert_eq!(session.revision(), expected);
    }
}

/// Open question: should a recipe that breaks an invariant still be
/// committed? Both policies raise identical notices and differ only in
/// whether the write lands.
#[test]
fn commit_policy_decides_whether_flagged_write_lands() {
    let run = |policy| {
        let doc = document_with(3, &[recipe("0", "1", "2"), Recipe::empty()]);
        let (mut session, notifier) = session_with(doc, policy);
        let mut last = SlotAssignment::NoSelection;
        for (slot, object) in [
            (RecipeSlot::First, "1"),
            (RecipeSlot::Second, "0"),
            (RecipeSlot::Result, "1"),
        ] {
            session.select_object(id(object)).unwrap();
            last = session.assign_slot(1, slot).unwrap();
        }
        (session, notifier.notices(), last)
    };

    let (committed, commit_notices, commit_outcome) = run(CommitPolicy::CommitFlagged);
    let (rejected, reject_notices, reject_outcome) = run(CommitPolicy::RejectInvalid);

    assert_eq!(commit_notices, reject_notices);
    assert_eq!(
        commit_notices,
        vec![SELF_PRODUCTION_NOTICE.to_string(), DUPLICATE_NOTICE.to_string()]
    );

    assert!(commit_outcome.committed());
    assert_eq!(committed.document().recipes()[1], recipe("1", "0", "1"));
    assert_eq!(committed.selection(), None);
    assert_eq!(committed.violations().len(), 3);

    assert!(!reject_outcome.committed());
    assert_eq!(rejected.document().recipes()[1].result(), None);
    assert_eq!(rejected.selection(), Some(&id("1")));
    assert!(rejected.violations().is_empty());
}
