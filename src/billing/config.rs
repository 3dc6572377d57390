use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::core::{GroupId, PersonId};

use super::payment_slip;

/// The payment-slip variant a group bills with.
///
/// ES slips (red) are paid without a reference; ESR slips (orange) carry a
/// reference number tied to the group's ESR participant number. Both exist
/// in a postal and a bank-routed form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentSlip {
    /// Red slip, paid to a postal account without reference.
    #[default]
    Es,
    /// Orange slip, reference-based, postal account.
    Esr,
    /// Red slip routed through a bank account.
    BankEs,
    /// Orange slip routed through a bank account.
    BankEsr,
}

impl PaymentSlip {
    /// Whether payment is routed through a bank account.
    pub fn bank(self) -> bool {
        matches!(self, Self::BankEs | Self::BankEsr)
    }

    /// Whether the slip carries an ESR reference number.
    pub fn with_reference(self) -> bool {
        matches!(self, Self::Esr | Self::BankEsr)
    }

    /// Whether payment is made without a reference (plain transfer).
    pub fn without_reference(self) -> bool {
        !self.with_reference()
    }
}

/// One reminder level of a group's dunning flow.
///
/// Owned by the [`InvoiceConfig`]; removed together with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentReminderConfig {
    /// Reminder level (1 = first reminder).
    pub level: u8,
    pub title: String,
    pub text: String,
    /// Days granted on top of the original due date.
    pub due_days: u32,
}

/// Billing identity and payment settings of a group.
///
/// Exactly one config exists per group (enforced by
/// [`InvoiceConfigRegistry`](super::InvoiceConfigRegistry)). A config is
/// created blank together with its group and filled in later by the group's
/// administrators, which is why most presence rules only apply on update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceConfig {
    pub group_id: GroupId,
    /// Next invoice sequence number, starts at 1.
    pub sequence_number: u64,
    /// Days until an issued invoice is due.
    pub due_days: u32,
    /// Billing contact person.
    pub contact: Option<PersonId>,
    /// Invoice list page size for rendering.
    pub page_size: u32,
    /// Sender address block printed on invoices.
    pub address: Option<String>,
    /// Free-text payment information printed on invoices.
    pub payment_information: Option<String>,
    /// Payee line(s) printed on the payment slip.
    pub payee: Option<String>,
    /// Beneficiary block, required for bank-routed slips.
    pub beneficiary: Option<String>,
    pub iban: Option<String>,
    /// Postal account number in `NN-NNN..-N` form, check-digit protected.
    pub account_number: Option<String>,
    /// ESR participant number, required for reference-based slips.
    pub participant_number: Option<String>,
    pub payment_slip: PaymentSlip,
    pub payment_reminders: Vec<PaymentReminderConfig>,
}

impl InvoiceConfig {
    /// A blank config with the schema defaults, as created with its group.
    pub fn new(group_id: GroupId) -> Self {
        Self {
            group_id,
            sequence_number: 1,
            due_days: 30,
            contact: None,
            page_size: 15,
            address: None,
            payment_information: None,
            payee: None,
            beneficiary: None,
            iban: None,
            account_number: None,
            participant_number: None,
            payment_slip: PaymentSlip::default(),
            payment_reminders: Vec::new(),
        }
    }

    /// Due date of an invoice issued on `issue_date`.
    pub fn due_date_from(&self, issue_date: NaiveDate) -> NaiveDate {
        issue_date
            .checked_add_days(Days::new(u64::from(self.due_days)))
            .unwrap_or(NaiveDate::MAX)
    }

    /// Issue the next ESR reference number and advance the sequence.
    pub fn next_reference(&mut self) -> String {
        let reference = payment_slip::reference_number(self.group_id.0, self.sequence_number);
        self.sequence_number += 1;
        reference
    }
}
