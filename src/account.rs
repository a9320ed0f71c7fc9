use std::io::{self, Write};

/// Upper bound on recorded transactions per account. Once reached, further
/// deposits and withdrawals still move the balance but are no longer
/// recorded in history.
pub const MAX_TRANSACTIONS: usize = 10;

#[derive(Debug, PartialEq, Clone)]
pub struct Account {
    /// Unique account number. Immutable after construction.
    number: u32,

    holder: String,

    /// Using an `f64` here is not advised but done for simplicity.
    /// Balances should be stored with fixed precision to ensure
    /// correct and precise arithmetic operations.
    balance: f64,

    /// Bounded append-only transaction log.
    history: Vec<String>,
}

impl Account {
    pub fn new(holder: impl Into<String>, number: u32, balance: f64) -> Self {
        Account {
            number,
            holder: holder.into(),
            balance,
            history: Vec::with_capacity(MAX_TRANSACTIONS),
        }
    }

    pub fn holder(&self) -> &str {
        &self.holder
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Credits the account. Non-positive amounts are ignored without any
    /// report; withdrawals by contrast signal failure through their return
    /// flag. The asymmetry is intentional.
    pub fn deposit(&mut self, amount: f64) {
        if amount > 0.0 {
            self.balance += amount;
            self.record(format!(
                "Deposited ${:.2}, New Balance: ${:.2}",
                amount, self.balance
            ));
        }
    }

    /// Debits the account. Succeeds only for positive amounts covered by
    /// the current balance; on failure nothing is mutated or recorded.
    pub fn withdraw(&mut self, amount: f64) -> bool {
        if amount > 0.0 && amount <= self.balance {
            self.balance -= amount;
            self.record(format!(
                "Withdrew ${:.2}, New Balance: ${:.2}",
                amount, self.balance
            ));
            true
        } else {
            false
        }
    }

    fn record(&mut self, entry: String) {
        if self.history.len() < MAX_TRANSACTIONS {
            self.history.push(entry);
        } else {
            eprintln!("Transaction history full for account {}!", self.number);
        }
    }

    /// Writes the recorded history to `out`. Read-only projection.
    pub fn write_history(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(
            out,
            "\nTransaction History for Account {} ({}):",
            self.number, self.holder
        )?;
        for entry in &self.history {
            writeln!(out, "{}", entry)?;
        }
        Ok(())
    }
}
