//! Console reporter: a ranked table with per-attribute badges.

use std::fmt::Write;

use walletrate_core::errors::ReportError;
use walletrate_core::Rating;

use super::Reporter;
use crate::aggregate::AggregateScore;
use crate::rated::RatedWallet;

/// Console reporter for human-readable terminal output.
pub struct ConsoleReporter {
    pub use_color: bool,
}

impl ConsoleReporter {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn badge(&self, rating: Rating) -> &'static str {
        match rating {
            Rating::Pass => "✓",
            Rating::Partial => "◐",
            Rating::Fail => "✗",
            Rating::Exempt => "⊘",
            Rating::Unrated => "?",
        }
    }

    fn color_start(&self, rating: Rating) -> &'static str {
        if !self.use_color {
            return "";
        }
        match rating {
            Rating::Pass => "\x1b[32m",    // green
            Rating::Partial => "\x1b[33m", // yellow
            Rating::Fail => "\x1b[31m",    // red
            Rating::Exempt | Rating::Unrated => "\x1b[90m",
        }
    }

    fn color_end(&self) -> &'static str {
        if self.use_color {
            "\x1b[0m"
        } else {
            ""
        }
    }

    fn format_score(score: &AggregateScore) -> String {
        match score.value() {
            Some(v) => format!("{:>5.1}%", v * 100.0),
            None => "   n/a".to_string(),
        }
    }

    fn badged(&self, rating: Rating) -> String {
        format!("{}{}{}", self.color_start(rating), self.badge(rating), self.color_end())
    }

    /// Every attribute of one rated wallet with its explanation and, where
    /// given, how the wallet could improve.
    pub fn detail(&self, wallet: &RatedWallet) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{} ({}) {}",
            wallet.metadata.display_name,
            wallet.variant,
            Self::format_score(&wallet.overall).trim_start(),
        );
        if !wallet.metadata.blurb.is_empty() {
            let _ = writeln!(out, "{}", wallet.metadata.blurb);
        }

        for group in &wallet.tree.groups {
            let score = wallet
                .group_score(group.id)
                .map(Self::format_score)
                .unwrap_or_default();
            let _ = writeln!(out, "\n{} {}", group.display_name, score.trim_start());
            if group.exempt {
                let _ = writeln!(out, "  {} not applicable to {} wallets", self.badged(Rating::Exempt), wallet.variant);
                continue;
            }
            for attribute in &group.attributes {
                let eval = &attribute.evaluation;
                let _ = writeln!(
                    out,
                    "  {} {}: {}",
                    self.badged(eval.rating),
                    attribute.display_name,
                    eval.explanation
                );
                if let Some(how) = &eval.how_to_improve {
                    let _ = writeln!(out, "      → {how}");
                }
            }
        }
        out
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Reporter for ConsoleReporter {
    fn name(&self) -> &'static str {
        "console"
    }

    fn generate(&self, wallets: &[RatedWallet]) -> Result<String, ReportError> {
        let mut out = String::new();

        out.push_str("╔══════════════════════════════════════════╗\n");
        out.push_str("║           Wallet Rating Report           ║\n");
        out.push_str("╚══════════════════════════════════════════╝\n\n");

        for (rank, wallet) in wallets.iter().enumerate() {
            // Writing to a String cannot fail.
            let _ = writeln!(
                out,
                "{:>2}. {} ({}) {}",
                rank + 1,
                wallet.metadata.display_name,
                wallet.variant,
                Self::format_score(&wallet.overall),
            );

            for group in &wallet.tree.groups {
                let score = wallet
                    .group_score(group.id)
                    .map(Self::format_score)
                    .unwrap_or_default();
                let badges: String = group
                    .attributes
                    .iter()
                    .map(|a| self.badged(a.rating()))
                    .collect::<Vec<_>>()
                    .join(" ");
                let _ = writeln!(out, "    {:<20} {} {}", group.display_name, score, badges);
            }
            out.push('\n');
        }

        let rated = wallets.iter().filter(|w| w.overall.value().is_some()).count();
        let _ = writeln!(
            out,
            "─── Summary: {} wallets, {} with rated attributes ───",
            wallets.len(),
            rated
        );
        out.push_str("Legend: ✓ pass  ◐ partial  ✗ fail  ⊘ exempt  ? unrated\n");

        Ok(out)
    }
}
