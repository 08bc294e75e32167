//! # Soulbound Token Ledger
//!
//! A 1:1 mapping between a holder address and a non-transferable token
//! identifier. The ledger has exactly one authorized caller — the identity
//! registry principal, configured once by the administrative owner — and
//! every privileged operation checks that capability address first.
//!
//! Non-transferability is a guard clause at the single transfer code path:
//! both transfer entry points reject unconditionally, regardless of caller.
//! There is no code path that moves a token between holders.

use std::collections::HashMap;

use thiserror::Error;

use aegis_core::{HolderAddress, TokenId};

/// Token collection name.
pub const TOKEN_NAME: &str = "Aegis Human Token";

/// Token collection symbol.
pub const TOKEN_SYMBOL: &str = "AHT";

/// Errors raised by the soulbound token ledger.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// A privileged operation was attempted by a caller other than the
    /// configured identity registry.
    #[error("caller {caller} is not the identity registry")]
    OnlyRegistry {
        /// The rejected caller.
        caller: HolderAddress,
    },

    /// An administrative operation was attempted by a caller other than
    /// the ledger owner.
    #[error("caller {caller} is not the ledger owner")]
    NotOwner {
        /// The rejected caller.
        caller: HolderAddress,
    },

    /// The target holder already holds a token.
    #[error("holder {holder} already holds a token")]
    AlreadyMinted {
        /// The holder that was already minted to.
        holder: HolderAddress,
    },

    /// The token id does not resolve to an owner.
    #[error("token {token_id} does not exist")]
    UnknownToken {
        /// The unresolved token id.
        token_id: TokenId,
    },

    /// Tokens are permanently bound to their holder.
    #[error("soulbound tokens are non-transferable")]
    NonTransferable,
}

/// The soulbound token ledger.
///
/// Ids are assigned from a monotonically increasing counter starting at 1;
/// a burned id is never reissued, so an id observed anywhere in the event
/// history always denotes the same mint.
#[derive(Debug, Clone)]
pub struct SoulboundLedger {
    owner: HolderAddress,
    registry: Option<HolderAddress>,
    next_id: u64,
    owners: HashMap<TokenId, HolderAddress>,
    tokens: HashMap<HolderAddress, TokenId>,
}

impl SoulboundLedger {
    /// Create an empty ledger administered by `owner`.
    ///
    /// No registry is authorized yet; every mint or burn fails with
    /// [`TokenError::OnlyRegistry`] until the owner calls
    /// [`SoulboundLedger::set_identity_registry`].
    pub fn new(owner: HolderAddress) -> Self {
        Self {
            owner,
            registry: None,
            next_id: 1,
            owners: HashMap::new(),
            tokens: HashMap::new(),
        }
    }

    // -- Administrative -------------------------------------------------

    /// Authorize `registry` as the single caller allowed to mint and burn.
    ///
    /// Owner-only. Normally configured once at deployment.
    pub fn set_identity_registry(
        &mut self,
        caller: &HolderAddress,
        registry: HolderAddress,
    ) -> Result<(), TokenError> {
        self.require_owner(caller)?;
        self.registry = Some(registry);
        Ok(())
    }

    /// Hand administrative ownership to `new_owner`. Owner-only.
    pub fn transfer_ownership(
        &mut self,
        caller: &HolderAddress,
        new_owner: HolderAddress,
    ) -> Result<(), TokenError> {
        self.require_owner(caller)?;
        self.owner = new_owner;
        Ok(())
    }

    // -- Privileged mutations -------------------------------------------

    /// Mint the next sequential token to `to`.
    ///
    /// Restricted to the configured registry. Fails with
    /// [`TokenError::AlreadyMinted`] if `to` already holds a token.
    pub fn mint(
        &mut self,
        caller: &HolderAddress,
        to: &HolderAddress,
    ) -> Result<TokenId, TokenError> {
        self.require_registry(caller)?;
        if self.tokens.contains_key(to) {
            return Err(TokenError::AlreadyMinted { holder: to.clone() });
        }

        let token_id = TokenId::new(self.next_id);
        self.next_id += 1;
        self.owners.insert(token_id, to.clone());
        self.tokens.insert(to.clone(), token_id);
        Ok(token_id)
    }

    /// Destroy `token_id`, removing ownership and reverse-lookup entries.
    ///
    /// Restricted to the configured registry.
    pub fn burn(
        &mut self,
        caller: &HolderAddress,
        token_id: TokenId,
    ) -> Result<(), TokenError> {
        self.require_registry(caller)?;
        let holder = self
            .owners
            .remove(&token_id)
            .ok_or(TokenError::UnknownToken { token_id })?;
        self.tokens.remove(&holder);
        Ok(())
    }

    // -- Disabled transfer surface --------------------------------------

    /// Transfer entry point — permanently disabled.
    ///
    /// Always fails with [`TokenError::NonTransferable`], regardless of
    /// caller, token, or ownership.
    pub fn transfer(
        &mut self,
        _caller: &HolderAddress,
        _from: &HolderAddress,
        _to: &HolderAddress,
        _token_id: TokenId,
    ) -> Result<(), TokenError> {
        Err(TokenError::NonTransferable)
    }

    /// Receiver-checked transfer entry point — permanently disabled.
    ///
    /// Always fails with [`TokenError::NonTransferable`].
    pub fn safe_transfer(
        &mut self,
        _caller: &HolderAddress,
        _from: &HolderAddress,
        _to: &HolderAddress,
        _token_id: TokenId,
    ) -> Result<(), TokenError> {
        Err(TokenError::NonTransferable)
    }

    // -- Views ----------------------------------------------------------

    /// Whether `holder` currently holds a token.
    pub fn has_minted(&self, holder: &HolderAddress) -> bool {
        self.tokens.contains_key(holder)
    }

    /// The token held by `holder`, if any.
    pub fn token_of(&self, holder: &HolderAddress) -> Option<TokenId> {
        self.tokens.get(holder).copied()
    }

    /// The holder of `token_id`, if it exists.
    pub fn owner_of(&self, token_id: TokenId) -> Option<&HolderAddress> {
        self.owners.get(&token_id)
    }

    /// The administrative owner principal.
    pub fn owner(&self) -> &HolderAddress {
        &self.owner
    }

    /// The authorized registry principal, if configured.
    pub fn identity_registry(&self) -> Option<&HolderAddress> {
        self.registry.as_ref()
    }

    /// Token collection name.
    pub fn name(&self) -> &'static str {
        TOKEN_NAME
    }

    /// Token collection symbol.
    pub fn symbol(&self) -> &'static str {
        TOKEN_SYMBOL
    }

    // -- Guards ---------------------------------------------------------

    fn require_owner(&self, caller: &HolderAddress) -> Result<(), TokenError> {
        if caller != &self.owner {
            return Err(TokenError::NotOwner {
                caller: caller.clone(),
            });
        }
        Ok(())
    }

    fn require_registry(&self, caller: &HolderAddress) -> Result<(), TokenError> {
        match &self.registry {
            Some(registry) if caller == registry => Ok(()),
            _ => Err(TokenError::OnlyRegistry {
                caller: caller.clone(),
            }),
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(n: u64) -> HolderAddress {
        HolderAddress::new(format!("0x{n:040x}")).unwrap()
    }

    /// Ledger with owner 0x..01 and registry 0x..02 configured.
    fn deployed() -> (SoulboundLedger, HolderAddress, HolderAddress) {
        let owner = addr(1);
        let registry = addr(2);
        let mut ledger = SoulboundLedger::new(owner.clone());
        ledger
            .set_identity_registry(&owner, registry.clone())
            .unwrap();
        (ledger, owner, registry)
    }

    // ── Administration ───────────────────────────────────────────────

    #[test]
    fn new_ledger_has_owner_and_no_registry() {
        let ledger = SoulboundLedger::new(addr(1));
        assert_eq!(ledger.owner(), &addr(1));
        assert!(ledger.identity_registry().is_none());
    }

    #[test]
    fn set_identity_registry_records_address() {
        let (ledger, _, registry) = deployed();
        assert_eq!(ledger.identity_registry(), Some(&registry));
    }

    #[test]
    fn set_identity_registry_rejects_non_owner() {
        let mut ledger = SoulboundLedger::new(addr(1));
        let result = ledger.set_identity_registry(&addr(3), addr(2));
        assert_eq!(
            result,
            Err(TokenError::NotOwner { caller: addr(3) })
        );
    }

    #[test]
    fn transfer_ownership_moves_admin_rights() {
        let mut ledger = SoulboundLedger::new(addr(1));
        ledger.transfer_ownership(&addr(1), addr(9)).unwrap();
        assert_eq!(ledger.owner(), &addr(9));
        // Old owner can no longer administer.
        assert!(matches!(
            ledger.set_identity_registry(&addr(1), addr(2)),
            Err(TokenError::NotOwner { .. })
        ));
        // New owner can.
        ledger.set_identity_registry(&addr(9), addr(2)).unwrap();
    }

    #[test]
    fn name_and_symbol() {
        let ledger = SoulboundLedger::new(addr(1));
        assert_eq!(ledger.name(), "Aegis Human Token");
        assert_eq!(ledger.symbol(), "AHT");
    }

    // ── Minting ──────────────────────────────────────────────────────

    #[test]
    fn mint_from_registry_assigns_id_one() {
        let (mut ledger, _, registry) = deployed();
        let id = ledger.mint(&registry, &addr(10)).unwrap();
        assert_eq!(id, TokenId::new(1));
        assert_eq!(ledger.owner_of(id), Some(&addr(10)));
        assert!(ledger.has_minted(&addr(10)));
        assert_eq!(ledger.token_of(&addr(10)), Some(TokenId::new(1)));
    }

    #[test]
    fn mint_increments_ids() {
        let (mut ledger, _, registry) = deployed();
        ledger.mint(&registry, &addr(10)).unwrap();
        ledger.mint(&registry, &addr(11)).unwrap();
        assert_eq!(ledger.token_of(&addr(10)), Some(TokenId::new(1)));
        assert_eq!(ledger.token_of(&addr(11)), Some(TokenId::new(2)));
    }

    #[test]
    fn mint_rejects_non_registry() {
        let (mut ledger, owner, _) = deployed();
        // Even the owner cannot mint.
        assert_eq!(
            ledger.mint(&owner.clone(), &addr(10)),
            Err(TokenError::OnlyRegistry { caller: owner })
        );
    }

    #[test]
    fn mint_rejects_before_registry_configured() {
        let mut ledger = SoulboundLedger::new(addr(1));
        assert!(matches!(
            ledger.mint(&addr(2), &addr(10)),
            Err(TokenError::OnlyRegistry { .. })
        ));
    }

    #[test]
    fn mint_rejects_double_mint() {
        let (mut ledger, _, registry) = deployed();
        ledger.mint(&registry, &addr(10)).unwrap();
        assert_eq!(
            ledger.mint(&registry, &addr(10)),
            Err(TokenError::AlreadyMinted { holder: addr(10) })
        );
    }

    // ── Burning ──────────────────────────────────────────────────────

    #[test]
    fn burn_clears_both_maps() {
        let (mut ledger, _, registry) = deployed();
        let id = ledger.mint(&registry, &addr(10)).unwrap();
        ledger.burn(&registry, id).unwrap();
        assert!(!ledger.has_minted(&addr(10)));
        assert_eq!(ledger.token_of(&addr(10)), None);
        assert_eq!(ledger.owner_of(id), None);
    }

    #[test]
    fn burn_rejects_non_registry() {
        let (mut ledger, _, registry) = deployed();
        let id = ledger.mint(&registry, &addr(10)).unwrap();
        assert!(matches!(
            ledger.burn(&addr(10), id),
            Err(TokenError::OnlyRegistry { .. })
        ));
    }

    #[test]
    fn burn_unknown_token_fails() {
        let (mut ledger, _, registry) = deployed();
        assert_eq!(
            ledger.burn(&registry, TokenId::new(7)),
            Err(TokenError::UnknownToken {
                token_id: TokenId::new(7)
            })
        );
    }

    #[test]
    fn burned_id_is_never_reissued() {
        let (mut ledger, _, registry) = deployed();
        let first = ledger.mint(&registry, &addr(10)).unwrap();
        ledger.burn(&registry, first).unwrap();
        let second = ledger.mint(&registry, &addr(11)).unwrap();
        assert_eq!(second, TokenId::new(2));
        assert_eq!(ledger.owner_of(first), None);
    }

    // ── Non-transferability ──────────────────────────────────────────

    #[test]
    fn transfer_always_rejected() {
        let (mut ledger, owner, registry) = deployed();
        let id = ledger.mint(&registry, &addr(10)).unwrap();

        // Holder, owner, and registry are all rejected alike.
        for caller in [addr(10), owner, registry] {
            assert_eq!(
                ledger.transfer(&caller, &addr(10), &addr(11), id),
                Err(TokenError::NonTransferable)
            );
            assert_eq!(
                ledger.safe_transfer(&caller, &addr(10), &addr(11), id),
                Err(TokenError::NonTransferable)
            );
        }
        // Ownership is untouched.
        assert_eq!(ledger.owner_of(id), Some(&addr(10)));
    }
}
