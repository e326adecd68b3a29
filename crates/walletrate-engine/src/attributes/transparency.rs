//! Transparency: licensing, source, funding, and fees.

use walletrate_core::errors::RatingError;
use walletrate_core::features::{FundingSource, SourceVisibility};
use walletrate_core::{Evaluation, RatingScale, WalletDocument};

use crate::attribute::Attribute;
use crate::tree::AttributeGroup;

pub fn group() -> AttributeGroup {
    AttributeGroup::new(
        "transparency",
        "Transparency",
        "Whether users can see how the wallet works and how it makes money.",
        vec![
            Box::new(OpenSource),
            Box::new(PublicSource),
            Box::new(FundingTransparency),
            Box::new(FeeTransparency),
        ],
    )
}

pub struct OpenSource;

impl Attribute for OpenSource {
    fn id(&self) -> &'static str {
        "openSource"
    }

    fn display_name(&self) -> &'static str {
        "Open source"
    }

    fn question(&self) -> &'static str {
        "Is the wallet's code under a free and open-source license?"
    }

    fn rating_scale(&self) -> RatingScale {
        RatingScale::Graded {
            pass: "Licensed under a FOSS license.",
            partial: "Source-available, with reuse restrictions.",
            fail: "Proprietary.",
        }
    }

    fn evaluate(&self, wallet: &WalletDocument) -> Result<Evaluation, RatingError> {
        Ok(match wallet.features.transparency.license {
            None => Evaluation::unrated("The license is not yet assessed."),
            Some(license) if license.is_free_and_open_source() => {
                Evaluation::pass("The wallet is free and open source.")
            }
            Some(license) if license.is_source_available() => {
                Evaluation::partial("The source is available but may not be freely reused.")
                    .with_improvement("Relicense under a FOSS license.")
            }
            Some(_) => Evaluation::fail("The wallet is proprietary.")
                .with_improvement("Release the code under a FOSS license."),
        })
    }
}

pub struct PublicSource;

impl Attribute for PublicSource {
    fn id(&self) -> &'static str {
        "sourceVisibility"
    }

    fn display_name(&self) -> &'static str {
        "Source visibility"
    }

    fn question(&self) -> &'static str {
        "Can anyone read the wallet's source code?"
    }

    fn rating_scale(&self) -> RatingScale {
        RatingScale::Binary {
            pass: "The source is publicly readable.",
            fail: "The source is private.",
        }
    }

    fn evaluate(&self, wallet: &WalletDocument) -> Result<Evaluation, RatingError> {
        Ok(match wallet.features.transparency.source_visibility {
            None => Evaluation::unrated("Source visibility is not yet assessed."),
            Some(SourceVisibility::Public) => Evaluation::pass("The source code is public."),
            Some(SourceVisibility::Private) => Evaluation::fail("The source code is private.")
                .with_improvement("Publish the source code."),
        })
    }
}

pub struct FundingTransparency;

impl Attribute for FundingTransparency {
    fn id(&self) -> &'static str {
        "fundingTransparency"
    }

    fn display_name(&self) -> &'static str {
        "Funding transparency"
    }

    fn question(&self) -> &'static str {
        "Is it clear how the wallet's development is paid for?"
    }

    fn rating_scale(&self) -> RatingScale {
        RatingScale::Graded {
            pass: "All funding sources are disclosed.",
            partial: "Some funding sources are undisclosed.",
            fail: "Funding is not disclosed.",
        }
    }

    fn evaluate(&self, wallet: &WalletDocument) -> Result<Evaluation, RatingError> {
        let Some(funding) = &wallet.features.transparency.funding else {
            return Ok(Evaluation::unrated("Funding has not been researched."));
        };
        let undisclosed = funding.contains(&FundingSource::Undisclosed);
        let disclosed = funding.iter().filter(|f| **f != FundingSource::Undisclosed).count();

        Ok(match (disclosed, undisclosed) {
            (0, _) => Evaluation::fail("The wallet does not disclose how it is funded.")
                .with_improvement("Publish the wallet's funding sources."),
            (_, true) => Evaluation::partial("Some funding sources are not disclosed.")
                .with_improvement("Disclose every funding source."),
            (n, false) => Evaluation::pass(format!("All {n} funding source(s) are disclosed.")),
        })
    }
}

pub struct FeeTransparency;

impl Attribute for FeeTransparency {
    fn id(&self) -> &'static str {
        "feeTransparency"
    }

    fn display_name(&self) -> &'static str {
        "Fee transparency"
    }

    fn question(&self) -> &'static str {
        "Are all fees shown before a transaction is confirmed?"
    }

    fn rating_scale(&self) -> RatingScale {
        RatingScale::Graded {
            pass: "Network and wallet fees are shown up front.",
            partial: "Some fees are shown.",
            fail: "Fees are hidden.",
        }
    }

    fn evaluate(&self, wallet: &WalletDocument) -> Result<Evaluation, RatingError> {
        let Some(fees) = wallet.features.transparency.fee_display else {
            return Ok(Evaluation::unrated("Fee display has not been researched."));
        };
        // A wallet without its own fee has nothing extra to show.
        let wallet_fee_ok = fees.wallet_fee_shown || matches!(fees.wallet_fee_bps, None | Some(0));

        Ok(match (fees.network_fee_shown, wallet_fee_ok) {
            (true, true) => Evaluation::pass("All fees are shown before confirming."),
            (true, false) => Evaluation::partial("The wallet's own fee is not shown before confirming.")
                .with_improvement("Show the wallet fee alongside the network fee."),
            (false, true) => Evaluation::partial("The network fee is not shown before confirming.")
                .with_improvement("Show the network fee before confirming."),
            (false, false) => Evaluation::fail("No fees are shown before confirming.")
                .with_improvement("Show network and wallet fees before confirming."),
        })
    }
}
