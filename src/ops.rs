use std::io::{self, Write};

use serde::Deserialize;

use crate::ledger::Ledger;

#[derive(Debug, Deserialize, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum OpKind {
    /// Opens a new account. Uses the `holder` column and `amount` as the
    /// opening balance.
    ///
    /// |type       |account |holder    |amount |
    /// |-----------|--------|----------|-------|
    /// |open       |1001    |John Doe  |500.0  |
    Open,

    /// Credits an account.
    ///
    /// |type       |account |holder |amount |
    /// |-----------|--------|-------|-------|
    /// |deposit    |1001    |       |200.0  |
    Deposit,

    /// Debits an account. Refused when the amount is non-positive or
    /// exceeds the balance.
    ///
    /// |type       |account |holder |amount |
    /// |-----------|--------|-------|-------|
    /// |withdrawal |1002    |       |300.0  |
    Withdrawal,

    /// Writes the account's details and history to the report. Notice
    /// that a display names no holder and no amount.
    ///
    /// |type       |account |holder |amount |
    /// |-----------|--------|-------|-------|
    /// |display    |1001    |       |       |
    Display,
}

/// One row of an operation script.
#[derive(Debug, Deserialize, Clone)]
pub struct Op {
    #[serde(rename = "type")]
    pub kind: OpKind,

    /// Account number the operation targets.
    #[serde(rename = "account")]
    pub number: u32,

    /// Only meaningful for `open`.
    pub holder: Option<String>,

    pub amount: Option<f64>,
}

impl Op {
    /// Applies this operation to `ledger`, reporting outcomes on `out`.
    /// Malformed rows are refused with a diagnostic rather than a crash.
    pub fn apply_to(&self, ledger: &mut Ledger, out: &mut impl Write) -> io::Result<()> {
        match self.kind {
            OpKind::Open => {
                let holder = self.holder.clone().unwrap_or_else(|| "Unknown".to_string());
                ledger.add_account(holder, self.number, self.amount.unwrap_or(0.0));
                Ok(())
            }
            OpKind::Deposit => match self.amount {
                Some(amount) => ledger.deposit(self.number, amount, out),
                None => {
                    eprintln!("Deposit for account {} names no amount!", self.number);
                    Ok(())
                }
            },
            OpKind::Withdrawal => match self.amount {
                Some(amount) => ledger.withdraw(self.number, amount, out),
                None => {
                    eprintln!("Withdrawal for account {} names no amount!", self.number);
                    Ok(())
                }
            },
            OpKind::Display => ledger.display_account(self.number, out),
        }
    }
}
