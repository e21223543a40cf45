use anchor_lang::prelude::*;

use crate::constants::MAX_BENEFICIARIES;
use crate::error::VestingError;

/// Cumulative normalized amount ever disbursed to one wallet.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClaimEntry {
    pub wallet: Pubkey,
    pub claimed: u128,
}

/// Claim ledger PDA. Kept separate from the schedule so that replacing the
/// schedule never resets prior claims; the counter only ever increases.
#[account]
pub struct ClaimLedger {
    pub entries: Vec<ClaimEntry>,
}

impl ClaimLedger {
    /// Space for discriminator + vec header + max-capacity entries.
    pub const fn space() -> usize {
        8 + 4 + (32 + 16) * MAX_BENEFICIARIES
    }

    pub fn claimed_of(&self, wallet: &Pubkey) -> u128 {
        self.entries
            .iter()
            .find(|e| e.wallet == *wallet)
            .map(|e| e.claimed)
            .unwrap_or(0)
    }

    /// Add `amount` to the wallet's counter, inserting an entry on first claim.
    pub fn credit(
        &mut self,
        wallet: Pubkey,
        amount: u128,
    ) -> core::result::Result<(), VestingError> {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.wallet == wallet) {
            entry.claimed = entry
                .claimed
                .checked_add(amount)
                .ok_or(VestingError::MathOverflow)?;
            return Ok(());
        }
        if self.entries.len() >= MAX_BENEFICIARIES {
            return Err(VestingError::LedgerFull);
        }
        self.entries.push(ClaimEntry {
            wallet,
            claimed: amount,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credit_inserts_then_accumulates() {
        let wallet = Pubkey::new_unique();
        let mut ledger = ClaimLedger { entries: vec![] };
        assert_eq!(ledger.claimed_of(&wallet), 0);

        ledger.credit(wallet, 30).unwrap();
        assert_eq!(ledger.claimed_of(&wallet), 30);

        ledger.credit(wallet, 70).unwrap();
        assert_eq!(ledger.claimed_of(&wallet), 100);
        assert_eq!(ledger.entries.len(), 1);
    }

    #[test]
    fn credit_rejects_overflow() {
        let wallet = Pubkey::new_unique();
        let mut ledger = ClaimLedger { entries: vec![] };
        ledger.credit(wallet, u128::MAX).unwrap();
        assert!(matches!(
            ledger.credit(wallet, 1),
            Err(VestingError::MathOverflow)
        ));
    }

    #[test]
    fn ledger_capacity_is_enforced() {
        let mut ledger = ClaimLedger { entries: vec![] };
        for _ in 0..MAX_BENEFICIARIES {
            ledger.credit(Pubkey::new_unique(), 1).unwrap();
        }
        assert!(matches!(
            ledger.credit(Pubkey::new_unique(), 1),
            Err(VestingError::LedgerFull)
        ));
    }
}
