use crate::models::{ActivityType, LogEntry, ModalView};
use crate::store::LogStore;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open(ModalDraft),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalDraft {
    pub date_key: String,
    pub activity_type: ActivityType,
    pub cost_draft: String,
    pub delete_enabled: bool,
}

impl ModalState {
    /// Opens the editor for `date_key`, pre-filled from any existing entry.
    pub fn open(date_key: impl Into<String>, store: &LogStore) -> Self {
        let date_key = date_key.into();
        let draft = match store.get(&date_key) {
            Some(entry) => ModalDraft {
                activity_type: entry.activity_type,
                cost_draft: if entry.cost == 0 {
                    String::new()
                } else {
                    entry.cost.to_string()
                },
                delete_enabled: true,
                date_key,
            },
            None => ModalDraft {
                activity_type: ActivityType::FixedClass,
                cost_draft: String::new(),
                delete_enabled: false,
                date_key,
            },
        };
        ModalState::Open(draft)
    }

    pub fn is_open(&self) -> bool {
        matches!(self, ModalState::Open(_))
    }

    pub fn date_key(&self) -> Option<&str> {
        match self {
            ModalState::Open(draft) => Some(&draft.date_key),
            ModalState::Closed => None,
        }
    }

    pub fn select_activity_type(self, activity_type: ActivityType) -> Self {
        match self {
            ModalState::Open(draft) => ModalState::Open(ModalDraft {
                activity_type,
                ..draft
            }),
            ModalState::Closed => ModalState::Closed,
        }
    }

    pub fn edit_cost(self, cost_draft: impl Into<String>) -> Self {
        match self {
            ModalState::Open(draft) => ModalState::Open(ModalDraft {
                cost_draft: cost_draft.into(),
                ..draft
            }),
            ModalState::Closed => ModalState::Closed,
        }
    }

    /// Writes the draft into `store` and closes. Returns the saved entry, or
    /// `None` when nothing was open.
    pub fn save(self, store: &mut LogStore) -> (Self, Option<LogEntry>) {
        let ModalState::Open(draft) = self else {
            return (ModalState::Closed, None);
        };
        let entry = match draft.activity_type {
            ActivityType::FixedClass => LogEntry::fixed_class(),
            ActivityType::CreditClass => LogEntry::credit_class(parse_cost(&draft.cost_draft)),
        };
        store.upsert(draft.date_key, entry);
        (ModalState::Closed, Some(entry))
    }

    /// Removes the open day's entry if there is one and closes.
    pub fn delete(self, store: &mut LogStore) -> (Self, Option<LogEntry>) {
        let removed = match &self {
            ModalState::Open(draft) => store.remove(&draft.date_key),
            ModalState::Closed => None,
        };
        (ModalState::Closed, removed)
    }

    pub fn close(self) -> Self {
        ModalState::Closed
    }

    pub fn view(&self) -> ModalView {
        match self {
            ModalState::Open(draft) => ModalView {
                open: true,
                date_key: Some(draft.date_key.clone()),
                title: format!("Log for {}", draft.date_key),
                activity_type: draft.activity_type,
                cost_draft: draft.cost_draft.clone(),
                cost_input_visible: draft.activity_type == ActivityType::CreditClass,
                delete_enabled: draft.delete_enabled,
            },
            ModalState::Closed => ModalView {
                open: false,
                date_key: None,
                title: String::new(),
                activity_type: ActivityType::FixedClass,
                cost_draft: String::new(),
                cost_input_visible: false,
                delete_enabled: false,
            },
        }
    }
}

/// Reads the leading integer of `input` the way a browser `parseInt` does:
/// surrounding whitespace, an optional sign, then digits up to the first
/// non-digit. Anything unreadable, and any negative value, is a cost of 0.
pub fn parse_cost(input: &str) -> u32 {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if negative || digits_len == 0 {
        return 0;
    }
    rest[..digits_len]
        .bytes()
        .fold(0u32, |acc, digit| {
            acc.saturating_mul(10).saturating_add(u32::from(digit - b'0'))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY: &str = "2024-02-11";

    #[test]
    fn open_on_empty_day_defaults_to_fixed_class() {
        let state = ModalState::open(DAY, &LogStore::new());
        let view = state.view();
        assert!(view.open);
        assert_eq!(view.title, "Log for 2024-02-11");
        assert_eq!(view.activity_type, ActivityType::FixedClass);
        assert_eq!(view.cost_draft, "");
        assert!(!view.delete_enabled);
        assert!(!view.cost_input_visible);
    }

    #[test]
    fn open_prefills_existing_entry() {
        let mut store = LogStore::new();
        store.upsert(DAY, LogEntry::credit_class(12));
        let view = ModalState::open(DAY, &store).view();
        assert_eq!(view.activity_type, ActivityType::CreditClass);
        assert_eq!(view.cost_draft, "12");
        assert!(view.delete_enabled);
        assert!(view.cost_input_visible);
    }

    #[test]
    fn select_keeps_modal_open() {
        let state = ModalState::open(DAY, &LogStore::new())
            .select_activity_type(ActivityType::CreditClass);
        assert!(state.is_open());
        assert_eq!(state.view().activity_type, ActivityType::CreditClass);
        assert!(state.view().cost_input_visible);

        let state = state.select_activity_type(ActivityType::FixedClass);
        assert!(!state.view().cost_input_visible);
    }

    #[test]
    fn save_fixed_class_always_costs_one() {
        let mut store = LogStore::new();
        let (state, saved) = ModalState::open(DAY, &store)
            .edit_cost("40")
            .save(&mut store);
        assert_eq!(state, ModalState::Closed);
        assert_eq!(saved, Some(LogEntry::fixed_class()));
        assert_eq!(store.get(DAY), Some(&LogEntry::fixed_class()));
    }

    #[test]
    fn save_non_numeric_credit_cost_is_zero() {
        let mut store = LogStore::new();
        let (_, saved) = ModalState::open(DAY, &store)
            .select_activity_type(ActivityType::CreditClass)
            .edit_cost("abc")
            .save(&mut store);
        assert_eq!(saved, Some(LogEntry::credit_class(0)));
        assert_eq!(store.get(DAY), Some(&LogEntry::credit_class(0)));
    }

    #[test]
    fn save_overwrites_previous_entry() {
        let mut store = LogStore::new();
        store.upsert(DAY, LogEntry::fixed_class());
        let (_, saved) = ModalState::open(DAY, &store)
            .select_activity_type(ActivityType::CreditClass)
            .edit_cost("15")
            .save(&mut store);
        assert_eq!(saved, Some(LogEntry::credit_class(15)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn save_while_closed_changes_nothing() {
        let mut store = LogStore::new();
        let (state, saved) = ModalState::Closed.save(&mut store);
        assert_eq!(state, ModalState::Closed);
        assert!(saved.is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn delete_removes_entry_and_closes() {
        let mut store = LogStore::new();
        store.upsert(DAY, LogEntry::credit_class(3));
        let (state, removed) = ModalState::open(DAY, &store).delete(&mut store);
        assert_eq!(state, ModalState::Closed);
        assert_eq!(removed, Some(LogEntry::credit_class(3)));
        assert!(store.get(DAY).is_none());
    }

    #[test]
    fn delete_on_empty_day_is_noop() {
        let mut store = LogStore::new();
        store.upsert("2024-02-12", LogEntry::fixed_class());
        let before = store.clone();
        let (state, removed) = ModalState::open(DAY, &store).delete(&mut store);
        assert_eq!(state, ModalState::Closed);
        assert!(removed.is_none());
        assert_eq!(store, before);
    }

    #[test]
    fn close_discards_draft() {
        let store = LogStore::new();
        let state = ModalState::open(DAY, &store)
            .select_activity_type(ActivityType::CreditClass)
            .edit_cost("20")
            .close();
        assert_eq!(state, ModalState::Closed);
        assert!(store.is_empty());
    }

    #[test]
    fn parse_cost_reads_leading_integer() {
        assert_eq!(parse_cost("12"), 12);
        assert_eq!(parse_cost("  7 "), 7);
        assert_eq!(parse_cost("12abc"), 12);
        assert_eq!(parse_cost("+5"), 5);
        assert_eq!(parse_cost("abc"), 0);
        assert_eq!(parse_cost(""), 0);
        assert_eq!(parse_cost("-4"), 0);
        assert_eq!(parse_cost("3.9"), 3);
        assert_eq!(parse_cost("99999999999"), u32::MAX);
    }
}
