//! Ecosystem support: account standards, naming, and chains.

use walletrate_core::errors::RatingError;
use walletrate_core::features::Support;
use walletrate_core::{Evaluation, RatingScale, Variant, WalletDocument};

use crate::attribute::Attribute;
use crate::tree::AttributeGroup;

pub fn group() -> AttributeGroup {
    AttributeGroup::new(
        "ecosystem",
        "Ecosystem",
        "Support for the standards the wider ecosystem is converging on.",
        vec![
            Box::new(AccountAbstraction),
            Box::new(AddressResolution),
            Box::new(ChainConfigurability),
        ],
    )
}

pub struct AccountAbstraction;

impl Attribute for AccountAbstraction {
    fn id(&self) -> &'static str {
        "accountAbstraction"
    }

    fn display_name(&self) -> &'static str {
        "Account abstraction"
    }

    fn question(&self) -> &'static str {
        "Does the wallet support smart accounts?"
    }

    fn rating_scale(&self) -> RatingScale {
        RatingScale::Graded {
            pass: "Supports both ERC-4337 and EIP-7702 smart accounts.",
            partial: "Supports one smart account standard.",
            fail: "Externally owned accounts only.",
        }
    }

    fn evaluate(&self, wallet: &WalletDocument) -> Result<Evaluation, RatingError> {
        let Some(accounts) = wallet.features.ecosystem.account_types else {
            return Ok(Evaluation::unrated("Supported account types are not yet assessed."));
        };
        Ok(match (accounts.erc4337, accounts.eip7702) {
            (true, true) => Evaluation::pass("Supports ERC-4337 and EIP-7702 smart accounts."),
            (true, false) => Evaluation::partial("Supports ERC-4337 smart accounts but not EIP-7702.")
                .with_improvement("Add EIP-7702 support."),
            (false, true) => Evaluation::partial("Supports EIP-7702 but not ERC-4337 smart accounts.")
                .with_improvement("Add ERC-4337 support."),
            (false, false) => Evaluation::fail("Only externally owned accounts are supported.")
                .with_improvement("Support ERC-4337 or EIP-7702 smart accounts."),
        })
    }
}

pub struct AddressResolution;

impl Attribute for AddressResolution {
    fn id(&self) -> &'static str {
        "addressResolution"
    }

    fn display_name(&self) -> &'static str {
        "Address resolution"
    }

    fn question(&self) -> &'static str {
        "Can you send to human-readable names?"
    }

    fn rating_scale(&self) -> RatingScale {
        RatingScale::Graded {
            pass: "Resolves ENS names and chain-specific addresses.",
            partial: "Resolves one kind of human-readable address.",
            fail: "Raw hex addresses only.",
        }
    }

    fn exempt_variants(&self) -> &'static [Variant] {
        &[Variant::Hardware]
    }

    fn evaluate(&self, wallet: &WalletDocument) -> Result<Evaluation, RatingError> {
        Ok(match wallet.features.ecosystem.address_resolution {
            Support::Unknown => Evaluation::unrated("Address resolution is not yet assessed."),
            Support::NotSupported => Evaluation::fail("Only raw hex addresses are accepted.")
                .with_improvement("Resolve ENS names."),
            Support::Supported(res) => match (res.ens, res.chain_specific) {
                (true, true) => Evaluation::pass("Resolves ENS names and chain-specific addresses."),
                (true, false) | (false, true) => {
                    Evaluation::partial("Only some human-readable address formats resolve.")
                        .with_improvement("Resolve both ENS names and chain-specific addresses.")
                }
                (false, false) => Evaluation::fail("No human-readable address format resolves.")
                    .with_improvement("Resolve ENS names."),
            },
        })
    }
}

pub struct ChainConfigurability;

impl Attribute for ChainConfigurability {
    fn id(&self) -> &'static str {
        "chainConfigurability"
    }

    fn display_name(&self) -> &'static str {
        "Chain configurability"
    }

    fn question(&self) -> &'static str {
        "Can you add the chains you use?"
    }

    fn rating_scale(&self) -> RatingScale {
        RatingScale::Graded {
            pass: "Custom chains and L2 networks can be added.",
            partial: "Either custom chains or L2 networks, not both.",
            fail: "Fixed chain list.",
        }
    }

    fn exempt_variants(&self) -> &'static [Variant] {
        &[Variant::Hardware]
    }

    fn evaluate(&self, wallet: &WalletDocument) -> Result<Evaluation, RatingError> {
        Ok(match wallet.features.ecosystem.chain_configurability {
            Support::Unknown => Evaluation::unrated("Chain configurability is not yet assessed."),
            Support::NotSupported => Evaluation::fail("The list of chains is fixed.")
                .with_improvement("Allow adding custom chains."),
            Support::Supported(chains) => match (chains.custom_chains, chains.l2_networks) {
                (true, true) => Evaluation::pass("Custom chains and L2 networks can be added."),
                (false, false) => Evaluation::fail("No chains can be added.")
                    .with_improvement("Allow adding custom chains."),
                _ => Evaluation::partial("Only some kinds of chains can be added.")
                    .with_improvement("Allow adding both custom chains and L2 networks."),
            },
        })
    }
}
