//! Privacy: what the wallet and its providers learn about the user.

use walletrate_core::errors::RatingError;
use walletrate_core::features::{MultiAddressHandling, Support};
use walletrate_core::{Evaluation, RatingScale, Variant, WalletDocument};

use crate::attribute::Attribute;
use crate::tree::AttributeGroup;

pub fn group() -> AttributeGroup {
    AttributeGroup::new(
        "privacy",
        "Privacy",
        "How much the wallet reveals about its users to third parties.",
        vec![
            Box::new(AddressCorrelation),
            Box::new(MultiAddressCorrelation),
            Box::new(TransactionPrivacy),
        ],
    )
}

/// Can a third party link the user's address to their IP?
pub struct AddressCorrelation;

impl Attribute for AddressCorrelation {
    fn id(&self) -> &'static str {
        "addressCorrelation"
    }

    fn display_name(&self) -> &'static str {
        "Address correlation"
    }

    fn question(&self) -> &'static str {
        "Can any third party link your wallet address to your IP address?"
    }

    fn rating_scale(&self) -> RatingScale {
        RatingScale::Graded {
            pass: "No third party sees both your address and your IP.",
            partial: "Third parties see your address, but not alongside your IP.",
            fail: "A third party sees your address together with your IP.",
        }
    }

    fn exempt_variants(&self) -> &'static [Variant] {
        &[Variant::Hardware]
    }

    fn evaluate(&self, wallet: &WalletDocument) -> Result<Evaluation, RatingError> {
        let Some(collection) = &wallet.features.privacy.data_collection else {
            return Ok(Evaluation::unrated("Data collection has not been researched."));
        };

        let linking: Vec<&str> = collection
            .collectors
            .iter()
            .filter(|c| c.collects_ip && c.collects_addresses)
            .map(|c| c.entity.as_str())
            .collect();
        if !linking.is_empty() {
            return Ok(Evaluation::fail(format!(
                "{} can link your address to your IP.",
                linking.join(", ")
            ))
            .with_improvement("Proxy requests so no provider sees both address and IP."));
        }

        Ok(if collection.collectors.iter().any(|c| c.collects_addresses) {
            Evaluation::partial("Your addresses are shared with third parties, but not your IP.")
                .with_improvement("Stop sharing addresses with third parties.")
        } else {
            Evaluation::pass("No third party receives your addresses.")
        })
    }
}

/// Can a provider link the user's addresses to each other?
pub struct MultiAddressCorrelation;

impl Attribute for MultiAddressCorrelation {
    fn id(&self) -> &'static str {
        "multiAddressCorrelation"
    }

    fn display_name(&self) -> &'static str {
        "Multi-address correlation"
    }

    fn question(&self) -> &'static str {
        "Can a provider tell that several of your addresses belong to the same person?"
    }

    fn rating_scale(&self) -> RatingScale {
        RatingScale::Graded {
            pass: "Each address is queried in isolation.",
            partial: "Addresses are batched, but through a proxy.",
            fail: "Addresses are batched in a single request.",
        }
    }

    fn exempt_variants(&self) -> &'static [Variant] {
        &[Variant::Hardware]
    }

    fn evaluate(&self, wallet: &WalletDocument) -> Result<Evaluation, RatingError> {
        Ok(match wallet.features.privacy.multi_address {
            None => Evaluation::unrated("Multi-address handling has not been researched."),
            Some(MultiAddressHandling::Isolated) => {
                Evaluation::pass("Each address is queried over a separate connection.")
            }
            Some(MultiAddressHandling::BatchedViaProxy) => {
                Evaluation::partial("Addresses are queried together, but the proxy hides your IP.")
                    .with_improvement("Query each address over a separate circuit.")
            }
            Some(MultiAddressHandling::Batched) => {
                Evaluation::fail("All of your addresses are sent to the provider in one request.")
                    .with_improvement("Query each address over a separate connection.")
            }
        })
    }
}

pub struct TransactionPrivacy;

impl Attribute for TransactionPrivacy {
    fn id(&self) -> &'static str {
        "transactionPrivacy"
    }

    fn display_name(&self) -> &'static str {
        "Transaction privacy"
    }

    fn question(&self) -> &'static str {
        "Can you receive funds without revealing your main address?"
    }

    fn rating_scale(&self) -> RatingScale {
        RatingScale::Binary {
            pass: "Supports stealth addresses.",
            fail: "Every payment reveals the receiving address.",
        }
    }

    fn evaluate(&self, wallet: &WalletDocument) -> Result<Evaluation, RatingError> {
        Ok(match &wallet.features.privacy.stealth_addresses {
            Support::Unknown => Evaluation::unrated("Stealth address support is not yet assessed."),
            Support::NotSupported => Evaluation::fail("The wallet does not support stealth addresses.")
                .with_improvement("Support a stealth address standard such as ERC-5564."),
            Support::Supported(stealth) => {
                Evaluation::pass(format!("Supports stealth addresses ({}).", stealth.standard))
            }
        })
    }
}
