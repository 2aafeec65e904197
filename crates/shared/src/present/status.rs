use crate::model::withdrawal::WithdrawalStatus;

/// Presentation metadata for a status value. `label_key` is an i18n
/// key; the frontend owns the translated strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusBadge {
    pub label_key: &'static str,
    pub text_class: &'static str,
    pub background_class: &'static str,
}

/// Total over every status, including `Unknown`: unexpected server data
/// gets a neutral badge instead of an error.
pub fn status_badge(status: WithdrawalStatus) -> StatusBadge {
    match status {
        WithdrawalStatus::Pending => StatusBadge {
            label_key: "withdrawals.status.pending",
            text_class: "text-yellow-400",
            background_class: "bg-yellow-500/10",
        },
        WithdrawalStatus::Approved => StatusBadge {
            label_key: "withdrawals.status.approved",
            text_class: "text-blue-400",
            background_class: "bg-blue-500/10",
        },
        WithdrawalStatus::Rejected => StatusBadge {
            label_key: "withdrawals.status.rejected",
            text_class: "text-red-400",
            background_class: "bg-red-500/10",
        },
        WithdrawalStatus::Completed => StatusBadge {
            label_key: "withdrawals.status.completed",
            text_class: "text-green-400",
            background_class: "bg-green-500/10",
        },
        WithdrawalStatus::Cancelled => StatusBadge {
            label_key: "withdrawals.status.cancelled",
            text_class: "text-gray-400",
            background_class: "bg-gray-500/10",
        },
        WithdrawalStatus::Unknown => StatusBadge {
            label_key: "withdrawals.status.unknown",
            text_class: "text-gray-400",
            background_class: "bg-gray-500/10",
        },
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WithdrawalAction {
    Approve,
    Reject,
    Complete,
}

impl WithdrawalAction {
    pub fn as_slug(&self) -> &'static str {
        match self {
            WithdrawalAction::Approve => "approve",
            WithdrawalAction::Reject => "reject",
            WithdrawalAction::Complete => "complete",
        }
    }
}

/// Admin actions offered for a record in the given state. Mirrors the
/// upstream lifecycle: pending can be approved or rejected, approved can
/// be completed, terminal states offer nothing.
pub fn available_actions(status: WithdrawalStatus) -> &'static [WithdrawalAction] {
    match status {
        WithdrawalStatus::Pending => &[WithdrawalAction::Approve, WithdrawalAction::Reject],
        WithdrawalStatus::Approved => &[WithdrawalAction::Complete],
        WithdrawalStatus::Rejected
        | WithdrawalStatus::Completed
        | WithdrawalStatus::Cancelled
        | WithdrawalStatus::Unknown => &[],
    }
}
