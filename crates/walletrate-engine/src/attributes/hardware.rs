//! Hardware security. Applies only to hardware wallets.

use walletrate_core::errors::RatingError;
use walletrate_core::{Evaluation, RatingScale, Variant, WalletDocument};

use crate::attribute::{require_hardware, Attribute};
use crate::tree::AttributeGroup;

pub fn group() -> AttributeGroup {
    AttributeGroup::new(
        "hardwareSecurity",
        "Hardware security",
        "Properties of the signing device itself.",
        vec![Box::new(FirmwareOpenSource), Box::new(SupplyChainProtection)],
    )
    .exempt_for(&Variant::SOFTWARE)
}

pub struct FirmwareOpenSource;

impl Attribute for FirmwareOpenSource {
    fn id(&self) -> &'static str {
        "firmwareOpenSource"
    }

    fn display_name(&self) -> &'static str {
        "Open-source firmware"
    }

    fn question(&self) -> &'static str {
        "Can anyone read and reuse the device firmware?"
    }

    fn rating_scale(&self) -> RatingScale {
        RatingScale::Graded {
            pass: "Firmware is under a free and open-source license.",
            partial: "Firmware source is readable but not freely licensed.",
            fail: "Firmware is proprietary.",
        }
    }

    fn evaluate(&self, wallet: &WalletDocument) -> Result<Evaluation, RatingError> {
        let hardware = require_hardware(wallet, self.id())?;
        Ok(match hardware.firmware_license {
            None => Evaluation::unrated("The firmware license is not yet assessed."),
            Some(license) if license.is_free_and_open_source() => {
                Evaluation::pass("The firmware is free and open source.")
            }
            Some(license) if license.is_source_available() => {
                Evaluation::partial("The firmware source is available but not freely licensed.")
                    .with_improvement("Relicense the firmware under a FOSS license.")
            }
            Some(_) => Evaluation::fail("The firmware is proprietary.")
                .with_improvement("Publish the firmware under a FOSS license."),
        })
    }
}

pub struct SupplyChainProtection;

impl Attribute for SupplyChainProtection {
    fn id(&self) -> &'static str {
        "supplyChainProtection"
    }

    fn display_name(&self) -> &'static str {
        "Supply chain protection"
    }

    fn question(&self) -> &'static str {
        "Can a buyer tell whether the device was tampered with before it arrived?"
    }

    fn rating_scale(&self) -> RatingScale {
        RatingScale::Graded {
            pass: "Tamper-evident packaging and cryptographic device attestation.",
            partial: "Only one of packaging or attestation.",
            fail: "No tamper detection.",
        }
    }

    fn evaluate(&self, wallet: &WalletDocument) -> Result<Evaluation, RatingError> {
        let hardware = require_hardware(wallet, self.id())?;
        let Some(chain) = hardware.supply_chain else {
            return Ok(Evaluation::unrated("Supply chain protections are not yet assessed."));
        };
        Ok(match (chain.tamper_evident_packaging, chain.device_attestation) {
            (true, true) => {
                Evaluation::pass("The device ships tamper-evident and can attest its authenticity.")
            }
            (false, true) => Evaluation::partial("The device attests its authenticity, but packaging is not tamper-evident.")
                .with_improvement("Ship devices in tamper-evident packaging."),
            (true, false) => Evaluation::partial("Packaging is tamper-evident, but the device cannot prove it is genuine.")
                .with_improvement("Add cryptographic device attestation."),
            (false, false) => Evaluation::fail("There is no way to detect a tampered device.")
                .with_improvement("Add device attestation and tamper-evident packaging."),
        })
    }
}
