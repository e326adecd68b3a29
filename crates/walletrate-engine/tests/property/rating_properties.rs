//! Property tests for rating arbitrary wallet documents.

use std::sync::Arc;

use proptest::prelude::*;

use test_fixtures::WalletBuilder;
use walletrate_core::features::{
    AccountTypes, ClearSigning, ClearSigningLevel, CustomRpc, DataCollection, DataCollector,
    FeeDisplay, FundingSource, HardwareFeatures, HardwareWalletSupport, KeyExport,
    KeyExportFormat, License, MultiAddressHandling, ScamAlerts, SecurityAudit, SourceVisibility,
    Support, SupplyChain, TransactionSubmission, WalletFeatures,
};
use walletrate_core::{Rating, Variant, WalletDocument};
use walletrate_engine::{default_tree, Aggregator};

fn aggregator() -> Aggregator {
    Aggregator::with_default_scoring(Arc::new(default_tree().unwrap()))
}

fn support<T: Clone + std::fmt::Debug>(
    inner: impl Strategy<Value = T>,
) -> impl Strategy<Value = Support<T>> {
    prop_oneof![
        Just(Support::Unknown),
        Just(Support::NotSupported),
        inner.prop_map(Support::Supported),
    ]
}

fn license() -> impl Strategy<Value = License> {
    prop_oneof![
        Just(License::Mit),
        Just(License::Gpl3),
        Just(License::Busl),
        Just(License::Proprietary),
    ]
}

fn audit() -> impl Strategy<Value = SecurityAudit> {
    proptest::option::of(any::<u32>()).prop_map(|flaws| SecurityAudit {
        auditor: "Auditor".to_string(),
        date: "2025-01-01".to_string(),
        unaddressed_flaws: flaws,
    })
}

fn collector() -> impl Strategy<Value = DataCollector> {
    (any::<bool>(), any::<bool>()).prop_map(|(ip, addresses)| DataCollector {
        entity: "Provider".to_string(),
        collects_ip: ip,
        collects_addresses: addresses,
    })
}

fn features() -> impl Strategy<Value = WalletFeatures> {
    let security = (
        proptest::option::of(prop::collection::vec(audit(), 0..3)),
        support(prop::collection::vec("[A-Z][a-z]{2,6}", 0..3)),
        support(prop_oneof![
            Just(ClearSigningLevel::Full),
            Just(ClearSigningLevel::Partial),
            Just(ClearSigningLevel::Blind),
        ]),
        support(any::<(bool, bool, bool)>()),
    );
    let privacy = (
        proptest::option::of(prop::collection::vec(collector(), 0..3)),
        proptest::option::of(prop_oneof![
            Just(MultiAddressHandling::Isolated),
            Just(MultiAddressHandling::BatchedViaProxy),
            Just(MultiAddressHandling::Batched),
        ]),
        support(Just("ERC-5564".to_string())),
    );
    let sovereignty = (
        support(any::<bool>()),
        support(any::<(bool, bool)>()),
        support(prop::collection::vec(
            prop_oneof![
                Just(KeyExportFormat::Bip39Mnemonic),
                Just(KeyExportFormat::PrivateKey),
                Just(KeyExportFormat::Proprietary),
            ],
            0..3,
        )),
    );
    let transparency = (
        proptest::option::of(license()),
        proptest::option::of(any::<bool>()),
        proptest::option::of(prop::collection::vec(
            prop_oneof![
                Just(FundingSource::Grants),
                Just(FundingSource::Donations),
                Just(FundingSource::Undisclosed),
            ],
            0..3,
        )),
        proptest::option::of((any::<bool>(), any::<bool>(), proptest::option::of(0u32..200))),
    );
    let ecosystem = (
        proptest::option::of(any::<(bool, bool)>()),
        support(any::<(bool, bool)>()),
        support(any::<(bool, bool)>()),
    );
    let hardware = proptest::option::of((
        proptest::option::of(license()),
        proptest::option::of(any::<(bool, bool)>()),
    ));

    (security, privacy, sovereignty, transparency, ecosystem, hardware).prop_map(
        |(security, privacy, sovereignty, transparency, ecosystem, hardware)| {
            let mut f = WalletBuilder::new("generated").build().features;

            f.security.security_audits = security.0;
            f.security.hardware_wallet_support =
                map_support(security.1, |brands| HardwareWalletSupport { brands });
            f.security.clear_signing = map_support(security.2, |level| ClearSigning { level });
            f.security.scam_alerts = map_support(security.3, |(c, p, l)| ScamAlerts {
                contract_warnings: c,
                phishing_domains: p,
                leaks_browsing_data: l,
            });

            f.privacy.data_collection = privacy.0.map(|collectors| DataCollection { collectors });
            f.privacy.multi_address = privacy.1;
            f.privacy.stealth_addresses = map_support(privacy.2, |standard| {
                walletrate_core::features::StealthAddresses { standard }
            });

            f.self_sovereignty.custom_rpc = map_support(sovereignty.0, |per_chain| CustomRpc { per_chain });
            f.self_sovereignty.transaction_submission =
                map_support(sovereignty.1, |(own_node, forced_inclusion)| TransactionSubmission {
                    own_node,
                    forced_inclusion,
                });
            f.self_sovereignty.key_export = map_support(sovereignty.2, |formats| KeyExport { formats });

            f.transparency.license = transparency.0;
            f.transparency.source_visibility = transparency.1.map(|public| {
                if public {
                    SourceVisibility::Public
                } else {
                    SourceVisibility::Private
                }
            });
            f.transparency.funding = transparency.2;
            f.transparency.fee_display = transparency.3.map(|(network, wallet, bps)| FeeDisplay {
                network_fee_shown: network,
                wallet_fee_shown: wallet,
                wallet_fee_bps: bps,
            });

            f.ecosystem.account_types = ecosystem.0.map(|(erc4337, eip7702)| AccountTypes {
                eoa: true,
                erc4337,
                eip7702,
            });
            f.ecosystem.address_resolution = map_support(ecosystem.1, |(ens, chain_specific)| {
                walletrate_core::features::AddressResolution { ens, chain_specific }
            });
            f.ecosystem.chain_configurability =
                map_support(ecosystem.2, |(custom_chains, l2_networks)| {
                    walletrate_core::features::ChainConfigurability {
                        custom_chains,
                        l2_networks,
                    }
                });

            f.hardware = hardware.map(|(firmware_license, supply_chain)| HardwareFeatures {
                firmware_license,
                supply_chain: supply_chain.map(|(packaging, attestation)| SupplyChain {
                    tamper_evident_packaging: packaging,
                    device_attestation: attestation,
                }),
            });
            f
        },
    )
}

fn map_support<A, B>(support: Support<A>, f: impl FnOnce(A) -> B) -> Support<B> {
    match support {
        Support::Unknown => Support::Unknown,
        Support::NotSupported => Support::NotSupported,
        Support::Supported(a) => Support::Supported(f(a)),
    }
}

fn wallet(features: WalletFeatures, variant: Variant) -> WalletDocument {
    WalletBuilder::new("generated")
        .variant(variant)
        .features(|f| *f = features)
        .build()
}

fn variant() -> impl Strategy<Value = Variant> {
    prop::sample::select(Variant::ALL.to_vec())
}

proptest! {
    #[test]
    fn rating_is_total_over_well_formed_documents(f in features(), v in variant()) {
        let doc = wallet(f, v);
        let result = aggregator().rate_wallet(&doc, v);
        if v.is_hardware() && doc.features.hardware.is_none() {
            prop_assert!(result.is_err());
        } else {
            prop_assert!(result.is_ok());
        }
    }

    #[test]
    fn scores_stay_in_range_and_match_counts(f in features(), v in variant()) {
        prop_assume!(!v.is_hardware() || f.hardware.is_some());
        let rated = aggregator().rate_wallet(&wallet(f, v), v).unwrap();
        for g in &rated.group_scores {
            prop_assert!((0.0..=1.0).contains(&g.score.score));
            prop_assert_eq!(g.score.no_rated_attributes, g.score.counts.rated() == 0);
        }
        prop_assert!((0.0..=1.0).contains(&rated.overall.score));
    }

    #[test]
    fn rating_is_deterministic(f in features(), v in variant()) {
        prop_assume!(!v.is_hardware() || f.hardware.is_some());
        let doc = wallet(f, v);
        let agg = aggregator();
        let a = agg.rate_wallet(&doc, v).unwrap();
        let b = agg.rate_wallet(&doc, v).unwrap();
        prop_assert_eq!(a.overall.score.to_bits(), b.overall.score.to_bits());
        prop_assert_eq!(a, b);
    }

    #[test]
    fn identity_map_preserves_scores(f in features(), v in variant()) {
        prop_assume!(!v.is_hardware() || f.hardware.is_some());
        let agg = aggregator();
        let rated = agg.rate_wallet(&wallet(f, v), v).unwrap();
        let mapped = rated.tree.map_evaluations(|_, a| a.evaluation.clone());
        prop_assert_eq!(&mapped, &rated.tree);
        let rescored = agg.score_tree(&mapped);
        prop_assert_eq!(rescored.groups, rated.group_scores);
        prop_assert_eq!(rescored.overall, rated.overall);
    }

    #[test]
    fn exempt_attributes_never_reach_scores(f in features()) {
        prop_assume!(f.hardware.is_some());
        let agg = aggregator();
        let mut flipped = f.clone();
        flipped.security.hardware_wallet_support = match &f.security.hardware_wallet_support {
            Support::NotSupported => Support::Supported(HardwareWalletSupport {
                brands: vec!["Ledger".to_string(), "Trezor".to_string()],
            }),
            _ => Support::NotSupported,
        };

        let rated = agg.rate_wallet(&wallet(f, Variant::Hardware), Variant::Hardware).unwrap();
        let exempt = rated
            .tree
            .iter_attributes()
            .filter(|(_, a)| a.rating() == Rating::Exempt)
            .count();
        prop_assert_eq!(rated.overall.counts.exempt, exempt);

        // The attribute is exempt for hardware, so its input is irrelevant.
        let other = agg
            .rate_wallet(&wallet(flipped, Variant::Hardware), Variant::Hardware)
            .unwrap();
        prop_assert_eq!(other.group_scores, rated.group_scores);
        prop_assert_eq!(other.overall, rated.overall);
    }
}
