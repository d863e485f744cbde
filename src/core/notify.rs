//! Notification seam between the ledger and whatever surface renders
//! user feedback. Events are presentation hints, not data contracts.

use crate::domain::MealType;

/// Feedback emitted after a successful ledger mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerEvent {
    MealAdded {
        food_name: String,
        meal_type: MealType,
    },
    MealRemoved {
        food_name: String,
    },
}

impl LedgerEvent {
    /// The toast-style line a presentation surface would show.
    pub fn message(&self) -> String {
        match self {
            LedgerEvent::MealAdded {
                food_name,
                meal_type,
            } => format!("Added {} to your {}", food_name, meal_type),
            LedgerEvent::MealRemoved { food_name } => {
                format!("Removed {} from your log", food_name)
            }
        }
    }
}

/// Receives ledger events. Implemented by the CLI for console toasts;
/// the default implementation forwards to tracing.
pub trait Notifier: Send {
    fn notify(&self, event: &LedgerEvent);
}

/// Logs events through tracing at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, event: &LedgerEvent) {
        tracing::info!("{}", event.message());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_food_and_slot() {
        let added = LedgerEvent::MealAdded {
            food_name: "Apple".into(),
            meal_type: MealType::Breakfast,
        };
        assert_eq!(added.message(), "Added Apple to your breakfast");

        let removed = LedgerEvent::MealRemoved {
            food_name: "Salmon".into(),
        };
        assert_eq!(removed.message(), "Removed Salmon from your log");
    }
}
