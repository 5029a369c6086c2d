//! Message Commands

use collection_view::CollectionView;
use leptos::logging::log;

use crate::config::TextLimits;
use crate::error::{CommandError, CommandResult, FieldErrors};
use crate::models::{Conversation, Message, Sender};
use crate::validation::check_text_length;

fn not_found(id: u32) -> CommandError {
    CommandError::NotFound(format!("conversation #{}", id))
}

/// Append a buyer message to a conversation and bump its preview time
pub fn send_message(
    conversations: &mut CollectionView<Conversation>,
    conversation_id: u32,
    body: &str,
    timestamp: &str,
    limits: &TextLimits,
) -> CommandResult<Message> {
    let mut errors = FieldErrors::new();
    check_text_length(&mut errors, "message", body, "Message", 1, limits.message_max);
    errors.into_result()?;

    let conversation = conversations.find(&conversation_id).ok_or_else(|| not_found(conversation_id))?;
    let message = Message {
        id: conversation.messages.iter().map(|m| m.id).max().unwrap_or(0) + 1,
        sender: Sender::Buyer,
        content: body.trim().to_string(),
        timestamp: timestamp.to_string(),
        is_read: true,
    };

    let appended = message.clone();
    conversations.update_record(&conversation_id, |conversation| {
        conversation.messages.push(appended);
        conversation.last_message_time = "Just now".to_string();
    });
    log!("[MESSAGES] Sent message #{} in conversation #{}", message.id, conversation_id);
    Ok(message)
}

/// Mark every seller message as read, returning how many changed
pub fn mark_conversation_read(conversations: &mut CollectionView<Conversation>, conversation_id: u32) -> CommandResult<usize> {
    let mut changed = 0;
    let found = conversations.update_record(&conversation_id, |conversation| {
        for message in conversation.messages.iter_mut() {
            if message.sender == Sender::Seller && !message.is_read {
                message.is_read = true;
                changed += 1;
            }
        }
    });
    if !found {
        return Err(not_found(conversation_id));
    }
    if changed > 0 {
        log!("[MESSAGES] Marked {} message(s) read in conversation #{}", changed, conversation_id);
    }
    Ok(changed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock;
    use chrono::NaiveDate;
    use collection_view::CriteriaPatch;

    fn conversations() -> CollectionView<Conversation> {
        CollectionView::new(mock::conversations(), NaiveDate::from_ymd_opt(2024, 3, 20).unwrap())
    }

    #[test]
    fn test_send_message_appends_and_updates_preview() {
        let mut view = conversations();
        let sent = send_message(&mut view, 1, "  Sounds great, thanks!  ", "11:20 AM", &TextLimits::default()).unwrap();
        assert_eq!(sent.id, 5);
        assert_eq!(sent.sender, Sender::Buyer);

        let conversation = view.find(&1).unwrap();
        assert_eq!(conversation.messages.len(), 5);
        assert_eq!(conversation.last_message(), "Sounds great, thanks!");
        assert_eq!(conversation.last_message_time, "Just now");
    }

    #[test]
    fn test_blank_or_oversized_message_is_rejected() {
        let mut view = conversations();
        let limits = TextLimits::default();
        let err = send_message(&mut view, 2, "   ", "now", &limits).unwrap_err();
        assert_eq!(err.field_errors().get("message"), Some("Message is required"));

        let err = send_message(&mut view, 2, &"a".repeat(limits.message_max + 1), "now", &limits).unwrap_err();
        assert!(err.field_errors().has("message"));
        assert_eq!(view.find(&2).unwrap().messages.len(), 1);
    }

    #[test]
    fn test_send_to_unknown_conversation() {
        let mut view = conversations();
        let err = send_message(&mut view, 9, "hello", "now", &TextLimits::default()).unwrap_err();
        assert_eq!(err, CommandError::NotFound("conversation #9".to_string()));
    }

    #[test]
    fn test_mark_conversation_read() {
        let mut view = conversations();
        assert_eq!(view.find(&1).unwrap().unread_count(), 2);
        assert_eq!(mark_conversation_read(&mut view, 1).unwrap(), 2);
        assert_eq!(view.find(&1).unwrap().unread_count(), 0);
        assert_eq!(mark_conversation_read(&mut view, 1).unwrap(), 0);
        assert!(mark_conversation_read(&mut view, 9).is_err());
    }

    #[test]
    fn test_sending_keeps_search_results() {
        let mut view = conversations();
        view.set_criteria(CriteriaPatch::new().search("logo"));
        send_message(&mut view, 2, "Looking forward to it", "now", &TextLimits::default()).unwrap();
        let derived = view.derive();
        assert_eq!(derived.len(), 1);
        assert_eq!(derived[0].last_message(), "Looking forward to it");
    }
}
