//! Security: audits, hardware wallet support, clear signing, scam alerts.

use walletrate_core::errors::RatingError;
use walletrate_core::features::{ClearSigningLevel, Support};
use walletrate_core::{Evaluation, RatingScale, Variant, WalletDocument};

use crate::attribute::Attribute;
use crate::tree::AttributeGroup;

pub fn group() -> AttributeGroup {
    AttributeGroup::new(
        "security",
        "Security",
        "How well the wallet protects funds from theft and mistakes.",
        vec![
            Box::new(SecurityAudits),
            Box::new(HardwareWalletSupport),
            Box::new(ClearSigning),
            Box::new(ScamAlerts),
        ],
    )
}

/// Has the wallet been audited, and were the findings fixed?
pub struct SecurityAudits;

impl Attribute for SecurityAudits {
    fn id(&self) -> &'static str {
        "securityAudits"
    }

    fn display_name(&self) -> &'static str {
        "Security audits"
    }

    fn question(&self) -> &'static str {
        "Has the wallet been audited by an independent security firm?"
    }

    fn rating_scale(&self) -> RatingScale {
        RatingScale::Graded {
            pass: "Audited, with all reported flaws addressed.",
            partial: "Audited, but some reported flaws remain or were not tracked.",
            fail: "Never audited.",
        }
    }

    fn evaluate(&self, wallet: &WalletDocument) -> Result<Evaluation, RatingError> {
        let Some(audits) = &wallet.features.security.security_audits else {
            return Ok(Evaluation::unrated("Audit history has not been researched."));
        };
        if audits.is_empty() {
            return Ok(Evaluation::fail("The wallet has no known security audits.")
                .with_improvement("Commission an audit from an independent security firm."));
        }

        let open_flaws: u64 = audits
            .iter()
            .filter_map(|a| a.unaddressed_flaws)
            .map(u64::from)
            .sum();
        let untracked = audits.iter().any(|a| a.unaddressed_flaws.is_none());
        let auditors = audits
            .iter()
            .map(|a| a.auditor.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        Ok(if open_flaws > 0 {
            Evaluation::partial(format!(
                "Audited by {auditors}, but {open_flaws} reported flaw(s) remain unaddressed."
            ))
            .with_improvement("Fix or publicly respond to every audit finding.")
        } else if untracked {
            Evaluation::partial(format!(
                "Audited by {auditors}; whether all findings were fixed is not documented."
            ))
            .with_improvement("Publish the status of each audit finding.")
        } else {
            Evaluation::pass(format!(
                "Audited by {auditors} with all reported flaws addressed."
            ))
        })
    }
}

/// Can the wallet be used with an external hardware signer?
pub struct HardwareWalletSupport;

impl Attribute for HardwareWalletSupport {
    fn id(&self) -> &'static str {
        "hardwareWalletSupport"
    }

    fn display_name(&self) -> &'static str {
        "Hardware wallet support"
    }

    fn question(&self) -> &'static str {
        "Can keys be kept on a separate hardware signing device?"
    }

    fn rating_scale(&self) -> RatingScale {
        RatingScale::Graded {
            pass: "Works with hardware wallets from several vendors.",
            partial: "Works with a single hardware wallet vendor.",
            fail: "Does not work with hardware wallets.",
        }
    }

    fn exempt_variants(&self) -> &'static [Variant] {
        &[Variant::Hardware]
    }

    fn evaluate(&self, wallet: &WalletDocument) -> Result<Evaluation, RatingError> {
        Ok(match &wallet.features.security.hardware_wallet_support {
            Support::Unknown => Evaluation::unrated("Hardware wallet support is not yet assessed."),
            Support::NotSupported => Evaluation::fail("The wallet cannot use hardware signers.")
                .with_improvement("Add support for common hardware wallets."),
            Support::Supported(support) => match support.brands.as_slice() {
                [] => Evaluation::unrated(
                    "Hardware wallets are supported but the vendors are not listed.",
                ),
                [only] => Evaluation::partial(format!(
                    "Only one hardware wallet vendor is supported ({only})."
                ))
                .with_improvement("Support hardware wallets from more vendors."),
                brands => Evaluation::pass(format!(
                    "Supports {} hardware wallet vendors: {}.",
                    brands.len(),
                    brands.join(", ")
                )),
            },
        })
    }
}

/// Does the signing screen show what is actually being signed?
pub struct ClearSigning;

impl Attribute for ClearSigning {
    fn id(&self) -> &'static str {
        "clearSigning"
    }

    fn display_name(&self) -> &'static str {
        "Clear signing"
    }

    fn question(&self) -> &'static str {
        "Are transactions decoded into readable form before they are signed?"
    }

    fn rating_scale(&self) -> RatingScale {
        RatingScale::Graded {
            pass: "All transaction data is decoded and shown.",
            partial: "Some transaction data is decoded.",
            fail: "Transactions are blind-signed.",
        }
    }

    fn evaluate(&self, wallet: &WalletDocument) -> Result<Evaluation, RatingError> {
        Ok(match &wallet.features.security.clear_signing {
            Support::Unknown => Evaluation::unrated("Signing display is not yet assessed."),
            Support::NotSupported => Evaluation::fail("Transactions are shown only as raw data.")
                .with_improvement("Decode calldata and show it before signing."),
            Support::Supported(detail) => match detail.level {
                ClearSigningLevel::Full => {
                    Evaluation::pass("Every transaction field is decoded before signing.")
                }
                ClearSigningLevel::Partial => {
                    Evaluation::partial("Only some transaction data is decoded before signing.")
                        .with_improvement("Decode all calldata, including nested calls.")
                }
                ClearSigningLevel::Blind => Evaluation::fail("Only a hash is shown when signing.")
                    .with_improvement("Decode calldata and show it before signing."),
            },
        })
    }
}

/// Does the wallet warn about scams without leaking browsing data?
pub struct ScamAlerts;

impl Attribute for ScamAlerts {
    fn id(&self) -> &'static str {
        "scamAlerts"
    }

    fn display_name(&self) -> &'static str {
        "Scam alerts"
    }

    fn question(&self) -> &'static str {
        "Does the wallet warn about malicious contracts and phishing sites?"
    }

    fn rating_scale(&self) -> RatingScale {
        RatingScale::Graded {
            pass: "Warns about contracts and phishing domains without leaking data.",
            partial: "Some warnings, or warnings that leak browsing data.",
            fail: "No scam warnings.",
        }
    }

    fn evaluate(&self, wallet: &WalletDocument) -> Result<Evaluation, RatingError> {
        Ok(match &wallet.features.security.scam_alerts {
            Support::Unknown => Evaluation::unrated("Scam alerts are not yet assessed."),
            Support::NotSupported => Evaluation::fail("The wallet shows no scam warnings.")
                .with_improvement("Warn before interacting with known malicious contracts."),
            Support::Supported(alerts) => {
                let both = alerts.contract_warnings && alerts.phishing_domains;
                let any = alerts.contract_warnings || alerts.phishing_domains;
                if !any {
                    Evaluation::fail("Scam alerts are advertised but cover nothing.")
                        .with_improvement("Warn before interacting with known malicious contracts.")
                } else if alerts.leaks_browsing_data {
                    Evaluation::partial("Scam checks send visited domains or addresses to a third party.")
                        .with_improvement("Run scam checks locally or through a privacy-preserving lookup.")
                } else if both {
                    Evaluation::pass("Warns about malicious contracts and phishing domains privately.")
                } else {
                    Evaluation::partial("Only some kinds of scams trigger a warning.")
                        .with_improvement("Cover both malicious contracts and phishing domains.")
                }
            }
        })
    }
}
