use super::*;

fn open_core() -> WidgetCore {
    let mut core = WidgetCore::default();
    let _ = core.toggle_open();
    core
}

/// Pull the sequence out of a submit's `SendChat` action.
fn sent_seq(actions: &[WidgetAction]) -> u64 {
    match actions {
        [WidgetAction::SendChat { seq, .. }] => *seq,
        other => panic!("unexpected actions: {other:?}"),
    }
}

/// Open the widget and submit one message, returning the core mid-flight
/// plus the sequence of the outstanding request.
fn sending_core(text: &str) -> (WidgetCore, u64) {
    let mut core = open_core();
    core.set_input(text.to_owned());
    let seq = sent_seq(&core.submit());
    (core, seq)
}

// --- initial state ---

#[test]
fn starts_closed_and_empty() {
    let core = WidgetCore::default();
    assert_eq!(core.phase(), WidgetPhase::Closed);
    assert!(core.messages.is_empty());
    assert_eq!(core.unread, 0);
    assert!(core.banner.is_none());
    assert!(!core.conversation_started);
}

// --- open / close ---

#[test]
fn opening_requests_input_focus() {
    let mut core = WidgetCore::default();
    let actions = core.toggle_open();
    assert_eq!(core.phase(), WidgetPhase::OpenEmpty);
    assert_eq!(actions, vec![WidgetAction::FocusInput]);
}

#[test]
fn opening_clears_unread_counter() {
    let (mut core, seq) = sending_core("hi");
    let _ = core.toggle_open(); // close
    let _ = core.response_ok(seq, "hello!".to_owned(), false);
    assert_eq!(core.unread, 1);
    let _ = core.toggle_open(); // reopen
    assert_eq!(core.unread, 0);
}

#[test]
fn closing_emits_no_actions() {
    let mut core = open_core();
    let actions = core.toggle_open();
    assert!(actions.is_empty());
    assert_eq!(core.phase(), WidgetPhase::Closed);
}

#[test]
fn closing_dismisses_clear_confirmation() {
    let (mut core, seq) = sending_core("hi");
    let _ = core.response_ok(seq, "hello".to_owned(), false);
    core.request_clear();
    let _ = core.toggle_open();
    let _ = core.toggle_open();
    assert_eq!(core.phase(), WidgetPhase::OpenConversing);
    assert!(!core.confirming_clear);
}

// --- submit guards ---

#[test]
fn submit_blank_input_is_ignored() {
    let mut core = open_core();
    core.set_input(String::new());
    assert!(core.submit().is_empty());
    assert!(core.messages.is_empty());
}

#[test]
fn submit_whitespace_only_is_ignored() {
    let mut core = open_core();
    core.set_input("   \n\t ".to_owned());
    assert!(core.submit().is_empty());
    assert!(core.messages.is_empty());
    assert!(!core.conversation_started);
}

#[test]
fn submit_while_in_flight_is_ignored() {
    let (mut core, _seq) = sending_core("first");
    core.set_input("second".to_owned());
    let actions = core.submit();
    assert!(actions.is_empty());
    // Still just the user message and the placeholder.
    assert_eq!(core.messages.len(), 2);
}

#[test]
fn submit_while_confirming_clear_is_ignored() {
    let mut core = open_core();
    core.request_clear();
    core.set_input("hello".to_owned());
    assert!(core.submit().is_empty());
}

#[test]
fn can_submit_follows_guards() {
    let mut core = open_core();
    assert!(!core.can_submit());
    core.set_input("hello".to_owned());
    assert!(core.can_submit());
    let _ = core.submit();
    core.set_input("again".to_owned());
    assert!(!core.can_submit());
}

// --- submit happy path ---

#[test]
fn submit_appends_user_message_and_placeholder() {
    let mut core = open_core();
    core.set_input("  what do you build?  ".to_owned());
    let actions = core.submit();

    assert_eq!(core.messages.len(), 2);
    assert_eq!(core.messages[0].role, Role::User);
    assert_eq!(core.messages[0].content, "what do you build?");
    assert!(core.messages[1].is_typing);
    assert_eq!(core.messages[1].role, Role::Ai);
    assert!(core.conversation_started);
    assert!(core.input.is_empty());
    assert_eq!(core.phase(), WidgetPhase::Sending);

    match &actions[..] {
        [WidgetAction::SendChat { message, history, .. }] => {
            assert_eq!(message, "what do you build?");
            assert!(history.is_empty());
        }
        other => panic!("unexpected actions: {other:?}"),
    }
}

#[test]
fn second_submit_carries_prior_history_without_placeholder() {
    let (mut core, seq) = sending_core("hello");
    let _ = core.response_ok(seq, "hi there".to_owned(), false);
    core.set_input("tell me more".to_owned());
    let actions = core.submit();

    match &actions[..] {
        [WidgetAction::SendChat { history, .. }] => {
            assert_eq!(history.len(), 2);
            assert_eq!(history[0].role, "user");
            assert_eq!(history[0].content, "hello");
            assert_eq!(history[1].role, "ai");
            assert_eq!(history[1].content, "hi there");
        }
        other => panic!("unexpected actions: {other:?}"),
    }
}

#[test]
fn submit_clears_previous_banner() {
    let (mut core, seq) = sending_core("hello");
    let _ = core.response_http_error(seq, 503);
    assert!(core.banner.is_some());
    core.set_input("retry".to_owned());
    let _ = core.submit();
    assert!(core.banner.is_none());
}

#[test]
fn each_submit_gets_a_fresh_sequence() {
    let (mut core, first) = sending_core("hello");
    let _ = core.response_ok(first, "hi".to_owned(), false);
    core.set_input("more".to_owned());
    let second = sent_seq(&core.submit());
    assert!(second > first);
}

// --- successful responses ---

#[test]
fn response_removes_placeholder_and_reenables_submit() {
    let (mut core, seq) = sending_core("hello");
    let _ = core.response_ok(seq, "hi!".to_owned(), false);

    assert_eq!(core.messages.len(), 2);
    assert!(core.messages.iter().all(|m| !m.is_typing));
    assert_eq!(core.messages[1].content, "hi!");
    assert!(!core.in_flight);
    assert_eq!(core.phase(), WidgetPhase::OpenConversing);
    core.set_input("next".to_owned());
    assert!(core.can_submit());
}

#[test]
fn response_without_redirect_emits_nothing() {
    let (mut core, seq) = sending_core("hello");
    let actions = core.response_ok(seq, "plain answer".to_owned(), false);
    assert!(actions.is_empty());
}

#[test]
fn response_with_redirect_schedules_contact_scroll() {
    let (mut core, seq) = sending_core("how do I hire you?");
    let actions = core.response_ok(seq, "Use the contact form.".to_owned(), true);
    assert_eq!(actions, vec![WidgetAction::ScrollToContact { delay_ms: REDIRECT_DELAY_MS }]);
    assert!(core.messages[1].redirect_to_contact);
}

#[test]
fn reply_while_closed_increments_unread() {
    let (mut core, seq) = sending_core("hello");
    let _ = core.toggle_open(); // hide the panel mid-flight
    assert_eq!(core.phase(), WidgetPhase::Closed);
    assert!(core.in_flight, "closing must not cancel the request");

    let _ = core.response_ok(seq, "late reply".to_owned(), false);
    assert_eq!(core.unread, 1);
    assert_eq!(core.messages.last().map(|m| m.content.as_str()), Some("late reply"));
}

// --- failure responses: the banner asymmetry ---

#[test]
fn http_error_appends_fallback_and_sets_banner() {
    let (mut core, seq) = sending_core("hello");
    let actions = core.response_http_error(seq, 500);

    assert!(actions.is_empty());
    assert!(core.banner.is_some());
    let last = core.messages.last().unwrap();
    assert_eq!(last.role, Role::Ai);
    assert!(!last.is_typing);
    assert!(last.redirect_to_contact);
    assert!(last.content.contains("#contact"));
    assert!(!core.in_flight);
}

#[test]
fn network_error_appends_fallback_without_banner() {
    let (mut core, seq) = sending_core("hello");
    let actions = core.response_network_error(seq);

    assert!(actions.is_empty());
    assert!(core.banner.is_none(), "thrown failures must not raise the banner");
    let last = core.messages.last().unwrap();
    assert!(last.redirect_to_contact);
    assert!(last.content.contains("#contact"));
}

#[test]
fn fallback_texts_differ_between_failure_paths() {
    assert_ne!(http_fallback_message(), network_fallback_message());
}

#[test]
fn failure_paths_remove_the_placeholder() {
    let (mut core, seq) = sending_core("a");
    let _ = core.response_http_error(seq, 502);
    assert!(core.messages.iter().all(|m| !m.is_typing));

    let (mut core, seq) = sending_core("b");
    let _ = core.response_network_error(seq);
    assert!(core.messages.iter().all(|m| !m.is_typing));
}

// --- clear history ---

#[test]
fn clear_requires_confirmation() {
    let (mut core, seq) = sending_core("hello");
    let _ = core.response_ok(seq, "hi".to_owned(), false);
    core.request_clear();
    assert_eq!(core.phase(), WidgetPhase::ConfirmingClear);
    assert_eq!(core.messages.len(), 2, "nothing wiped until confirmed");
}

#[test]
fn confirm_clear_wipes_and_returns_to_open_empty() {
    let (mut core, seq) = sending_core("hello");
    let _ = core.response_http_error(seq, 500);
    core.request_clear();
    core.confirm_clear();

    assert!(core.messages.is_empty());
    assert!(!core.conversation_started);
    assert!(core.banner.is_none());
    assert_eq!(core.phase(), WidgetPhase::OpenEmpty);
}

#[test]
fn cancel_clear_preserves_everything() {
    let (mut core, seq) = sending_core("hello");
    let _ = core.response_ok(seq, "hi".to_owned(), false);
    core.request_clear();
    core.cancel_clear();

    assert_eq!(core.messages.len(), 2);
    assert!(core.conversation_started);
    assert_eq!(core.phase(), WidgetPhase::OpenConversing);
}

#[test]
fn confirm_clear_on_empty_conversation_is_harmless() {
    let mut core = open_core();
    core.request_clear();
    core.confirm_clear();
    assert!(core.messages.is_empty());
    assert_eq!(core.phase(), WidgetPhase::OpenEmpty);
}

// --- orphaned requests ---

#[test]
fn reply_from_cleared_request_is_dropped() {
    let (mut core, seq) = sending_core("hello");
    core.request_clear();
    core.confirm_clear();
    assert_eq!(core.phase(), WidgetPhase::OpenEmpty);

    let actions = core.response_ok(seq, "orphan reply".to_owned(), false);
    assert!(actions.is_empty());
    assert!(core.messages.is_empty(), "orphan reply must not land in the fresh conversation");
    assert_eq!(core.unread, 0);
}

#[test]
fn clear_mid_flight_routes_replies_to_the_new_request() {
    let (mut core, orphan) = sending_core("first question");
    core.request_clear();
    core.confirm_clear();

    // The clear re-enables submit; the orphaned request is still pending.
    core.set_input("second question".to_owned());
    let live = sent_seq(&core.submit());
    assert_ne!(orphan, live);

    // The late first reply arrives: it must not strip the live request's
    // placeholder or pose as the answer to the second question.
    let _ = core.response_ok(orphan, "stale answer".to_owned(), false);
    assert!(core.in_flight);
    assert!(core.messages.iter().any(|m| m.is_typing));

    let _ = core.response_ok(live, "real answer".to_owned(), false);
    assert!(!core.in_flight);
    assert_eq!(core.messages.last().map(|m| m.content.as_str()), Some("real answer"));
}

#[test]
fn stale_failures_leave_state_untouched() {
    let (mut core, orphan) = sending_core("hello");
    core.request_clear();
    core.confirm_clear();

    let _ = core.response_http_error(orphan, 503);
    assert!(core.banner.is_none());
    assert!(core.messages.is_empty());

    let _ = core.response_network_error(orphan);
    assert!(core.messages.is_empty());
}

// --- message ids ---

#[test]
fn ids_are_strictly_increasing() {
    let (mut core, seq) = sending_core("one");
    let _ = core.response_ok(seq, "two".to_owned(), false);
    core.set_input("three".to_owned());
    let _ = core.submit();

    let ids: Vec<u64> = core.messages.iter().map(|m| m.id).collect();
    assert!(ids.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn ids_never_collide_across_clears() {
    let (mut core, seq) = sending_core("one");
    let _ = core.response_ok(seq, "two".to_owned(), false);
    let max_before = core.messages.iter().map(|m| m.id).max().unwrap();

    core.request_clear();
    core.confirm_clear();
    core.set_input("fresh start".to_owned());
    let _ = core.submit();

    assert!(core.messages.iter().all(|m| m.id > max_before));
}

// --- banner ---

#[test]
fn dismiss_banner_clears_it() {
    let (mut core, seq) = sending_core("hello");
    let _ = core.response_http_error(seq, 500);
    core.dismiss_banner();
    assert!(core.banner.is_none());
}

#[test]
fn banner_text_carries_status() {
    let (mut core, seq) = sending_core("hello");
    let _ = core.response_http_error(seq, 429);
    assert!(core.banner.unwrap().contains("429"));
}
