//! Token program account layouts

use sol_primitives::Pubkey;

use crate::{read_coption, write_coption, BufferLayout, LayoutError, Reader};

/// Address of the token program, `TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA`
pub const TOKEN_PROGRAM_ID: Pubkey = Pubkey::from_bytes([
    6, 221, 246, 225, 215, 101, 161, 147, 217, 203, 225, 70, 206, 235, 121, 172, 28, 180, 133,
    237, 95, 91, 55, 145, 58, 140, 245, 133, 126, 255, 0, 169,
]);

/// State of a token account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccountState {
    /// Not yet initialized
    #[default]
    Uninitialized,
    /// Initialized and usable
    Initialized,
    /// Frozen by the mint's freeze authority
    Frozen,
}

impl BufferLayout for AccountState {
    fn read(reader: &mut Reader<'_>) -> Result<Self, LayoutError> {
        match u8::read(reader)? {
            0 => Ok(AccountState::Uninitialized),
            1 => Ok(AccountState::Initialized),
            2 => Ok(AccountState::Frozen),
            other => Err(LayoutError::InvalidTag {
                field: "state",
                value: u32::from(other),
            }),
        }
    }

    fn write(&self, out: &mut Vec<u8>) {
        let tag: u8 = match self {
            AccountState::Uninitialized => 0,
            AccountState::Initialized => 1,
            AccountState::Frozen => 2,
        };
        out.push(tag);
    }
}

/// Token account holding a balance of one mint
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TokenAccount {
    /// Mint this account holds
    pub mint: Pubkey,
    /// Owner allowed to move the balance
    pub owner: Pubkey,
    /// Balance in base units
    pub amount: u64,
    /// Delegate allowed to spend `delegated_amount`
    pub delegate: Option<Pubkey>,
    /// Account state
    pub state: AccountState,
    /// Rent-exempt reserve when this wraps native lamports
    pub is_native: Option<u64>,
    /// Amount the delegate may spend
    pub delegated_amount: u64,
    /// Authority allowed to close the account
    pub close_authority: Option<Pubkey>,
}

impl TokenAccount {
    /// Encoded size in bytes
    pub const LEN: usize = 165;
}

impl BufferLayout for TokenAccount {
    fn read(reader: &mut Reader<'_>) -> Result<Self, LayoutError> {
        Ok(TokenAccount {
            mint: Pubkey::read(reader)?,
            owner: Pubkey::read(reader)?,
            amount: u64::read(reader)?,
            delegate: read_coption(reader, "delegate")?,
            state: AccountState::read(reader)?,
            is_native: read_coption(reader, "is_native")?,
            delegated_amount: u64::read(reader)?,
            close_authority: read_coption(reader, "close_authority")?,
        })
    }

    fn write(&self, out: &mut Vec<u8>) {
        // 32 + 32 + 8 + 36 + 1 + 12 + 8 + 36
        self.mint.write(out);
        self.owner.write(out);
        self.amount.write(out);
        write_coption(&self.delegate, out);
        self.state.write(out);
        write_coption(&self.is_native, out);
        self.delegated_amount.write(out);
        write_coption(&self.close_authority, out);
    }
}

/// Token mint
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Mint {
    /// Authority allowed to mint new tokens; `None` once supply is fixed
    pub mint_authority: Option<Pubkey>,
    /// Total supply in base units
    pub supply: u64,
    /// Number of base-10 digits to the right of the decimal point
    pub decimals: u8,
    /// Whether the mint has been initialized
    pub is_initialized: bool,
    /// Authority allowed to freeze token accounts
    pub freeze_authority: Option<Pubkey>,
}

impl Mint {
    /// Encoded size in bytes
    pub const LEN: usize = 82;
}

impl BufferLayout for Mint {
    fn read(reader: &mut Reader<'_>) -> Result<Self, LayoutError> {
        Ok(Mint {
            mint_authority: read_coption(reader, "mint_authority")?,
            supply: u64::read(reader)?,
            decimals: u8::read(reader)?,
            is_initialized: bool::read(reader)?,
            freeze_authority: read_coption(reader, "freeze_authority")?,
        })
    }

    fn write(&self, out: &mut Vec<u8>) {
        write_coption(&self.mint_authority, out);
        self.supply.write(out);
        self.decimals.write(out);
        self.is_initialized.write(out);
        write_coption(&self.freeze_authority, out);
    }
}
