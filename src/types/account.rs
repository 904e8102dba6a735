//! Account entity for the account ledger
//!
//! An account is an identifier plus a single decimal balance. The balance is
//! never negative: credits add unconditionally, debits are rejected when the
//! balance cannot cover them.

use super::error::LedgerError;
use rust_decimal::Decimal;

/// Account identifier
///
/// Assigned by the store on creation; positive and immutable afterwards.
pub type AccountId = i64;

/// Ledger account state
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    /// Store-assigned identifier (0 until the account has been created)
    pub id: AccountId,

    /// Current balance, always `>= 0`
    pub balance: Decimal,
}

impl Account {
    /// Create a new account with a zero balance
    ///
    /// # Arguments
    ///
    /// * `id` - The identifier for this account (ignored by `AccountStore::create`)
    pub fn new(id: AccountId) -> Self {
        Account {
            id,
            balance: Decimal::ZERO,
        }
    }

    /// Add funds to the balance
    ///
    /// There is no upper bound other than the range of `Decimal`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The amount is negative
    /// - Adding the amount would overflow the balance
    pub fn credit(&mut self, amount: Decimal) -> Result<(), LedgerError> {
        let amount = non_negative(amount)?;

        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| LedgerError::arithmetic_overflow("credit", self.id))?;

        Ok(())
    }

    /// Remove funds from the balance
    ///
    /// A debit equal to the balance succeeds and leaves the account at zero.
    /// On any error the balance is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The amount is negative
    /// - The balance is lower than the amount
    pub fn debit(&mut self, amount: Decimal) -> Result<(), LedgerError> {
        let amount = non_negative(amount)?;

        if self.balance < amount {
            return Err(LedgerError::insufficient_funds(
                self.id,
                self.balance,
                amount,
            ));
        }

        self.balance = self
            .balance
            .checked_sub(amount)
            .ok_or_else(|| LedgerError::arithmetic_underflow("debit", self.id))?;

        Ok(())
    }
}

/// Reject negative amounts and clear the sign of `-0`
///
/// Adding `-0` to a zero balance would otherwise yield a negative-zero balance.
fn non_negative(mut amount: Decimal) -> Result<Decimal, LedgerError> {
    if amount < Decimal::ZERO {
        return Err(LedgerError::invalid_amount(amount));
    }
    if amount.is_zero() {
        amount.set_sign_positive(true);
    }
    Ok(amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn account_with(balance: Decimal) -> Account {
        Account { id: 1, balance }
    }

    #[test]
    fn test_new_account_starts_at_zero() {
        let account = Account::new(7);
        assert_eq!(account.id, 7);
        assert_eq!(account.balance, Decimal::ZERO);
    }

    #[rstest]
    #[case::zero_plus_amount(dec!(0), dec!(100.00), dec!(100.00))]
    #[case::existing_balance(dec!(70.00), dec!(0.01), dec!(70.01))]
    #[case::zero_amount(dec!(5), dec!(0), dec!(5))]
    #[case::high_precision(dec!(1.0000001), dec!(0.0000002), dec!(1.0000003))]
    fn test_credit_adds_amount(
        #[case] initial: Decimal,
        #[case] amount: Decimal,
        #[case] expected: Decimal,
    ) {
        let mut account = account_with(initial);
        account.credit(amount).unwrap();
        assert_eq!(account.balance, expected);
    }

    #[rstest]
    #[case::partial(dec!(100.00), dec!(30.00), dec!(70.00))]
    #[case::exact_balance(dec!(70.00), dec!(70.00), dec!(0.00))]
    #[case::zero_amount(dec!(10), dec!(0), dec!(10))]
    fn test_debit_subtracts_amount(
        #[case] initial: Decimal,
        #[case] amount: Decimal,
        #[case] expected: Decimal,
    ) {
        let mut account = account_with(initial);
        account.debit(amount).unwrap();
        assert_eq!(account.balance, expected);
        assert!(account.balance >= Decimal::ZERO);
    }

    #[rstest]
    #[case::empty_account(dec!(0), dec!(0.01))]
    #[case::large_overdraw(dec!(70.00), dec!(1000.00))]
    #[case::smallest_unit(dec!(1.00), dec!(1.0000001))]
    fn test_debit_rejects_overdraw_and_keeps_balance(
        #[case] initial: Decimal,
        #[case] amount: Decimal,
    ) {
        let mut account = account_with(initial);

        let result = account.debit(amount);

        assert_eq!(
            result,
            Err(LedgerError::InsufficientFunds {
                id: 1,
                balance: initial,
                requested: amount,
            })
        );
        assert_eq!(account.balance, initial);
    }

    #[rstest]
    #[case::credit(true)]
    #[case::debit(false)]
    fn test_negative_amount_is_rejected(#[case] is_credit: bool) {
        let mut account = account_with(dec!(50));
        let amount = dec!(-1.5);

        let result = if is_credit {
            account.credit(amount)
        } else {
            account.debit(amount)
        };

        assert_eq!(result, Err(LedgerError::invalid_amount(amount)));
        assert_eq!(account.balance, dec!(50));
    }

    #[rstest]
    #[case::credit_on_funded(dec!(5), true)]
    #[case::debit_on_funded(dec!(5), false)]
    #[case::credit_on_empty(Decimal::ZERO, true)]
    #[case::debit_on_empty(Decimal::ZERO, false)]
    fn test_negative_zero_is_accepted(#[case] initial: Decimal, #[case] is_credit: bool) {
        let mut account = account_with(initial);
        let amount = dec!(-0.00);

        if is_credit {
            account.credit(amount).unwrap();
        } else {
            account.debit(amount).unwrap();
        }

        assert_eq!(account.balance, initial);
        assert!(!account.balance.is_sign_negative());
        assert!(!account.balance.to_string().starts_with('-'));
    }

    #[test]
    fn test_credit_overflow_keeps_balance() {
        let mut account = account_with(Decimal::MAX);

        let result = account.credit(dec!(1));

        assert_eq!(result, Err(LedgerError::arithmetic_overflow("credit", 1)));
        assert_eq!(account.balance, Decimal::MAX);
    }

    // debit(credit(a), b) == balance + a - b whenever b <= balance + a
    #[rstest]
    #[case(dec!(0), dec!(100.00), dec!(30.00))]
    #[case(dec!(12.5), dec!(0), dec!(12.5))]
    #[case(dec!(1), dec!(2.345), dec!(3.345))]
    #[case(dec!(999999.99), dec!(0.01), dec!(1000000))]
    fn test_credit_then_debit_law(
        #[case] initial: Decimal,
        #[case] credit: Decimal,
        #[case] debit: Decimal,
    ) {
        let mut account = account_with(initial);
        account.credit(credit).unwrap();
        account.debit(debit).unwrap();
        assert_eq!(account.balance, initial + credit - debit);
    }
}
