use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use crate::account::Account;

/// Owns every account and performs lookup and dispatch. Accounts are kept
/// strictly ascending by account number so `lookup` can binary search;
/// `add_account` maintains the ordering by inserting at the sorted
/// position instead of trusting callers to insert in order.
#[derive(Debug)]
pub struct Ledger {
    accounts: Vec<Account>,
    max_accounts: usize,
}

impl Ledger {
    pub fn new(max_accounts: usize) -> Self {
        Ledger {
            accounts: Vec::with_capacity(max_accounts),
            max_accounts,
        }
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn account(&self, index: usize) -> &Account {
        &self.accounts[index]
    }

    /// Adds a new account, keeping the collection ordered. Returns `false`
    /// without mutating when the ledger is full or the number is already
    /// taken.
    pub fn add_account(&mut self, holder: impl Into<String>, number: u32, balance: f64) -> bool {
        if self.accounts.len() == self.max_accounts {
            eprintln!("Cannot add more accounts!");
            return false;
        }

        match self.search(number) {
            Ok(_) => {
                eprintln!("Account {} already exists!", number);
                false
            }
            Err(position) => {
                self.accounts
                    .insert(position, Account::new(holder, number, balance));
                true
            }
        }
    }

    /// Bounded binary search over the ordered account collection.
    /// `Ok` holds the matching index, `Err` the index where the number
    /// would be inserted.
    fn search(&self, number: u32) -> Result<usize, usize> {
        if self.accounts.is_empty() {
            return Err(0);
        }

        let mut left = 0usize;
        let mut right = self.accounts.len() - 1;
        while left <= right {
            let mid = left + (right - left) / 2;
            let found = self.accounts[mid].number();
            if found == number {
                return Ok(mid);
            }
            if found < number {
                left = mid + 1;
            } else {
                if mid == 0 {
                    break;
                }
                right = mid - 1;
            }
        }
        Err(left)
    }

    pub fn lookup(&self, number: u32) -> Option<usize> {
        self.search(number).ok()
    }

    /// Deposits into the named account, reporting the outcome on `out`.
    pub fn deposit(&mut self, number: u32, amount: f64, out: &mut impl Write) -> io::Result<()> {
        match self.lookup(number) {
            Some(index) => {
                self.accounts[index].deposit(amount);
                writeln!(out, "Deposited ${:.2} to Account {}", amount, number)
            }
            None => writeln!(out, "Account {} not found!", number),
        }
    }

    /// Withdraws from the named account, reporting success, refusal, or
    /// not-found on `out`.
    pub fn withdraw(&mut self, number: u32, amount: f64, out: &mut impl Write) -> io::Result<()> {
        match self.lookup(number) {
            Some(index) => {
                if self.accounts[index].withdraw(amount) {
                    writeln!(out, "Withdrew ${:.2} from Account {}", amount, number)
                } else {
                    writeln!(
                        out,
                        "Insufficient funds or invalid amount for Account {}",
                        number
                    )
                }
            }
            None => writeln!(out, "Account {} not found!", number),
        }
    }

    /// Writes the named account's details and full history to `out`.
    /// Read-only.
    pub fn display_account(&self, number: u32, out: &mut impl Write) -> io::Result<()> {
        match self.lookup(number) {
            Some(index) => {
                let account = &self.accounts[index];
                writeln!(out, "\nAccount Details:")?;
                writeln!(out, "Holder: {}", account.holder())?;
                writeln!(out, "Account Number: {}", account.number())?;
                writeln!(out, "Balance: ${:.2}", account.balance())?;
                account.write_history(out)
            }
            None => writeln!(out, "Account {} not found!", number),
        }
    }

    /// Writes a summary line and history block for every account in
    /// storage order. Read-only.
    pub fn write_all(&self, out: &mut impl Write) -> io::Result<()> {
        for account in &self.accounts {
            writeln!(
                out,
                "Account: {}, Holder: {}, Balance: ${:.2}",
                account.number(),
                account.holder(),
                account.balance()
            )?;
            account.write_history(out)?;
        }
        Ok(())
    }

    /// Appends every account's summary and history to the file at `path`,
    /// creating it if absent. Callers treat failure as non-fatal.
    pub fn save_all(&self, path: impl AsRef<Path>) -> io::Result<()> {
        let mut file = OpenOptions::new().append(true).create(true).open(path)?;
        self.write_all(&mut file)
    }
}
