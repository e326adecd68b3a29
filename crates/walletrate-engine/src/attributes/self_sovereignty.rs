//! Self-sovereignty: can the user act without the wallet developer?

use walletrate_core::errors::RatingError;
use walletrate_core::features::Support;
use walletrate_core::{Evaluation, RatingScale, Variant, WalletDocument};

use crate::attribute::Attribute;
use crate::tree::AttributeGroup;

pub fn group() -> AttributeGroup {
    AttributeGroup::new(
        "selfSovereignty",
        "Self-sovereignty",
        "Whether users keep control of their funds without depending on the developer.",
        vec![
            Box::new(SelfHostedNode),
            Box::new(TransactionInclusion),
            Box::new(AccountPortability),
        ],
    )
}

pub struct SelfHostedNode;

impl Attribute for SelfHostedNode {
    fn id(&self) -> &'static str {
        "selfHostedNode"
    }

    fn display_name(&self) -> &'static str {
        "Self-hosted node"
    }

    fn question(&self) -> &'static str {
        "Can the wallet use your own node instead of the developer's?"
    }

    fn rating_scale(&self) -> RatingScale {
        RatingScale::Graded {
            pass: "A custom RPC endpoint can be set for every chain.",
            partial: "A custom RPC endpoint can be set for mainnet only.",
            fail: "The RPC endpoint cannot be changed.",
        }
    }

    fn exempt_variants(&self) -> &'static [Variant] {
        &[Variant::Hardware]
    }

    fn evaluate(&self, wallet: &WalletDocument) -> Result<Evaluation, RatingError> {
        Ok(match wallet.features.self_sovereignty.custom_rpc {
            Support::Unknown => Evaluation::unrated("RPC configurability is not yet assessed."),
            Support::NotSupported => Evaluation::fail("The wallet only talks to its own RPC provider.")
                .with_improvement("Let users configure their own RPC endpoint."),
            Support::Supported(rpc) if rpc.per_chain => {
                Evaluation::pass("Every chain's RPC endpoint can point to your own node.")
            }
            Support::Supported(_) => Evaluation::partial("Only the mainnet RPC endpoint can be changed.")
                .with_improvement("Allow a custom RPC endpoint for every chain."),
        })
    }
}

/// Can the user get a transaction included if the developer's relays censor it?
pub struct TransactionInclusion;

impl Attribute for TransactionInclusion {
    fn id(&self) -> &'static str {
        "transactionInclusion"
    }

    fn display_name(&self) -> &'static str {
        "Transaction inclusion"
    }

    fn question(&self) -> &'static str {
        "Can you get transactions included without relying on the developer?"
    }

    fn rating_scale(&self) -> RatingScale {
        RatingScale::Graded {
            pass: "Transactions can go through your own node and be forced through L1.",
            partial: "Only one censorship-resistant path is available.",
            fail: "Transactions depend on the developer's infrastructure.",
        }
    }

    fn exempt_variants(&self) -> &'static [Variant] {
        &[Variant::Hardware]
    }

    fn evaluate(&self, wallet: &WalletDocument) -> Result<Evaluation, RatingError> {
        Ok(match wallet.features.self_sovereignty.transaction_submission {
            Support::Unknown => Evaluation::unrated("Transaction submission paths are not yet assessed."),
            Support::NotSupported => {
                Evaluation::fail("Transactions can only be sent through the developer's relays.")
                    .with_improvement("Allow broadcasting through a self-hosted node.")
            }
            Support::Supported(paths) => match (paths.own_node, paths.forced_inclusion) {
                (true, true) => Evaluation::pass(
                    "Transactions can be broadcast through your own node or forced through L1.",
                ),
                (true, false) => Evaluation::partial("Transactions can be broadcast through your own node, but L2 transactions cannot be forced through L1.")
                    .with_improvement("Support forced inclusion through the L1 inbox."),
                (false, true) => Evaluation::partial("L2 transactions can be forced through L1, but not broadcast through your own node.")
                    .with_improvement("Allow broadcasting through a self-hosted node."),
                (false, false) => Evaluation::fail("No censorship-resistant submission path is available.")
                    .with_improvement("Allow broadcasting through a self-hosted node."),
            },
        })
    }
}

/// Can the user leave with their keys?
pub struct AccountPortability;

impl Attribute for AccountPortability {
    fn id(&self) -> &'static str {
        "accountPortability"
    }

    fn display_name(&self) -> &'static str {
        "Account portability"
    }

    fn question(&self) -> &'static str {
        "Can you move your account to another wallet?"
    }

    fn rating_scale(&self) -> RatingScale {
        RatingScale::Graded {
            pass: "Keys export in a standard format.",
            partial: "Keys export only in a proprietary format.",
            fail: "Keys cannot be exported.",
        }
    }

    fn evaluate(&self, wallet: &WalletDocument) -> Result<Evaluation, RatingError> {
        Ok(match &wallet.features.self_sovereignty.key_export {
            Support::Unknown => Evaluation::unrated("Key export is not yet assessed."),
            Support::NotSupported => Evaluation::fail("Keys cannot be exported from the wallet.")
                .with_improvement("Allow exporting the recovery phrase."),
            Support::Supported(export) if export.formats.iter().any(|f| f.is_standard()) => {
                Evaluation::pass("Keys can be exported in a format other wallets import.")
            }
            Support::Supported(_) => {
                Evaluation::partial("Keys can only be exported in a proprietary format.")
                    .with_improvement("Support exporting a BIP-39 recovery phrase.")
            }
        })
    }
}
