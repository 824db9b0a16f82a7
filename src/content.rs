//! Copy and figures shown on the landing page.

use crate::components::icon::Icon;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: &[FaqEntry] = &[
    FaqEntry {
        question: "How does the crypto credit card work?",
        answer: "Aion's crypto credit card lets you spend crypto without selling your assets. Stake USDC as collateral to get instant crypto-backed credit lines. Use tap-to-pay technology for real-world purchases while earning yield on your collateral.",
    },
    FaqEntry {
        question: "Can I spend crypto without selling it?",
        answer: "Yes! Our crypto credit card allows you to spend your crypto purchasing power without triggering capital gains events. Your USDC collateral remains yours while backing your credit line for everyday spending.",
    },
    FaqEntry {
        question: "What makes this the best crypto credit card 2025?",
        answer: "Unlike traditional crypto cards, Aion offers yield-earning collateral, non-custodial control, no liquidation of assets, and real tap-to-pay functionality. You keep ownership while gaining spending power.",
    },
    FaqEntry {
        question: "How do I earn yield on my crypto collateral?",
        answer: "Your staked USDC earns competitive APY while serving as collateral for your crypto credit line. This creates self-repaying crypto credit where your yield helps cover interest payments automatically.",
    },
    FaqEntry {
        question: "Is this better than Nexo or Coinbase crypto cards?",
        answer: "Aion offers true non-custodial crypto credit with yield-earning collateral, unlike centralized alternatives. You maintain self-custody while accessing crypto credit lines with competitive terms and real-world utility.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepContent {
    pub ordinal: u8,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
    pub delay_ms: u32,
}

pub const STEPS: [StepContent; 4] = [
    StepContent {
        ordinal: 1,
        title: "Connect Crypto Wallet",
        description: "Connect your existing Web3 wallet to access crypto credit. Seamless integration with all major wallet providers for instant USDC credit lines.",
        icon: Icon::Wallet,
        delay_ms: 100,
    },
    StepContent {
        ordinal: 2,
        title: "Get Crypto-Backed Credit",
        description: "Receive instant crypto credit backed by your USDC collateral. No traditional credit checks - just stake crypto for credit.",
        icon: Icon::CreditCard,
        delay_ms: 200,
    },
    StepContent {
        ordinal: 3,
        title: "Spend Crypto Everywhere",
        description: "Use your crypto credit for everyday purchases. Tap-to-pay in stores, online shopping, and real-world payments without selling your crypto.",
        icon: Icon::RefreshCw,
        delay_ms: 300,
    },
    StepContent {
        ordinal: 4,
        title: "Earn Yield on Collateral",
        description: "Your staked USDC earns competitive APY while serving as collateral. Self-repaying crypto credit that grows your wealth.",
        icon: Icon::PiggyBank,
        delay_ms: 400,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureContent {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: [FeatureContent; 4] = [
    FeatureContent {
        icon: Icon::Zap,
        title: "Crypto Card Technology",
        description: "Advanced crypto credit card technology built for Web3. Support for all major wallets and real-world payments.",
    },
    FeatureContent {
        icon: Icon::Wallet,
        title: "USDC Credit Line",
        description: "Get instant credit backed by your USDC. Stable, reliable crypto collateral for everyday spending.",
    },
    FeatureContent {
        icon: Icon::Target,
        title: "Yield-Backed Credit",
        description: "Your collateral earns yield while providing credit. Turn staked crypto into spending power that pays for itself.",
    },
    FeatureContent {
        icon: Icon::Shield,
        title: "Tap-to-Pay Crypto",
        description: "Use crypto for real-world purchases with NFC tap-to-pay technology. Fast, secure, and widely accepted.",
    },
];

pub const STAKING_BENEFITS: [&str; 3] = [
    "Competitive APY rates",
    "Automated smart contracts",
    "Transparent on-chain transactions",
];

/// Illustrative figures on the yield card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YieldSnapshot {
    pub apy_percent: f64,
    pub apy_bar_fill_percent: u8,
    pub deposits: &'static str,
    pub earned: &'static str,
}

pub const YIELD_SNAPSHOT: YieldSnapshot = YieldSnapshot {
    apy_percent: 12.5,
    apy_bar_fill_percent: 75,
    deposits: "$25,000",
    earned: "$3,125",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SecurityBadge {
    pub icon: Icon,
    pub label: &'static str,
}

pub const SECURITY_BADGES: [SecurityBadge; 2] = [
    SecurityBadge {
        icon: Icon::Shield,
        label: "Non-Custodial Crypto Card",
    },
    SecurityBadge {
        icon: Icon::Wallet,
        label: "Real-World Crypto Payments",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indicator {
    Positive,
    Negative,
    Caution,
}

impl Indicator {
    pub fn css_class(self) -> &'static str {
        match self {
            Indicator::Positive => "indicator-positive",
            Indicator::Negative => "indicator-negative",
            Indicator::Caution => "indicator-caution",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComparisonClaim {
    pub indicator: Indicator,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComparisonColumn {
    pub badge: &'static str,
    pub title: &'static str,
    /// Our own product, drawn with the accent treatment.
    pub featured: bool,
    pub claims: &'static [ComparisonClaim],
}

const fn claim(indicator: Indicator, label: &'static str) -> ComparisonClaim {
    ComparisonClaim { indicator, label }
}

use Indicator::{Caution, Negative, Positive};

pub const COMPARISON: &[ComparisonColumn] = &[
    ComparisonColumn {
        badge: "Aion",
        title: "Best Crypto Credit Card 2025",
        featured: true,
        claims: &[
            claim(Positive, "True crypto credit (no selling)"),
            claim(Positive, "Yield-earning USDC collateral"),
            claim(Positive, "Non-custodial & self-repaying"),
            claim(Positive, "Real-world tap-to-pay"),
            claim(Positive, "Avoid capital gains tax"),
        ],
    },
    ComparisonColumn {
        badge: "Others",
        title: "Traditional Crypto Cards",
        featured: false,
        claims: &[
            claim(Negative, "Requires selling crypto"),
            claim(Negative, "No yield on holdings"),
            claim(Negative, "Custodial control"),
            claim(Negative, "Limited spending options"),
            claim(Negative, "Capital gains implications"),
        ],
    },
    ComparisonColumn {
        badge: "CeFi",
        title: "Centralized Platforms",
        featured: false,
        claims: &[
            claim(Caution, "Credit with collateral"),
            claim(Negative, "Custodial risk"),
            claim(Negative, "Centralized control"),
            claim(Negative, "Geographic restrictions"),
            claim(Caution, "Variable APY terms"),
        ],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMeta {
    pub title: &'static str,
    pub description: &'static str,
    pub keywords: &'static str,
    pub og_title: &'static str,
    pub og_description: &'static str,
    pub twitter_title: &'static str,
    pub twitter_description: &'static str,
}

pub const LANDING_META: PageMeta = PageMeta {
    title: "Aion - Best Crypto Credit Card 2025 | Spend Crypto Without Selling",
    description: "Get the best crypto credit card 2025. Spend crypto without selling with Aion's USDC-backed credit lines. Earn yield on collateral while using crypto for everyday purchases with tap-to-pay.",
    keywords: "best crypto credit card 2025, crypto credit card, spend crypto without selling, USDC credit card, crypto backed credit card, stablecoin credit card, crypto collateral credit, yield backed credit, crypto tap to pay, real world crypto payments, avoid capital gains crypto",
    og_title: "Aion - Revolutionary Crypto Credit Card | Turn Crypto Into Spending Power",
    og_description: "Revolutionary crypto credit card that lets you spend crypto without selling. Stake USDC, get instant credit, earn yield on collateral. The future of crypto payments is here.",
    twitter_title: "Aion - Crypto Credit Card | Spend USDC Without Selling",
    twitter_description: "Get instant crypto credit using your USDC. No selling required. Earn yield while spending crypto in stores with tap-to-pay technology.",
};

impl PageMeta {
    /// `(attribute, key, content)` for every meta tag the page sets.
    pub fn tags(&self) -> [(&'static str, &'static str, &'static str); 6] {
        [
            ("name", "description", self.description),
            ("name", "keywords", self.keywords),
            ("property", "og:title", self.og_title),
            ("property", "og:description", self.og_description),
            ("name", "twitter:title", self.twitter_title),
            ("name", "twitter:description", self.twitter_description),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_delays_strictly_increase() {
        assert!(STEPS.windows(2).all(|w| w[0].delay_ms < w[1].delay_ms));
        assert!(STEPS.iter().all(|s| s.delay_ms > 0));
    }

    #[test]
    fn landing_meta_sets_every_seo_tag() {
        let keys: Vec<&str> = LANDING_META.tags().iter().map(|(_, key, _)| *key).collect();
        assert_eq!(
            keys,
            [
                "description",
                "keywords",
                "og:title",
                "og:description",
                "twitter:title",
                "twitter:description",
            ]
        );
        assert!(LANDING_META.tags().iter().all(|(_, _, content)| !content.is_empty()));
        assert_eq!(LANDING_META.tags()[2].0, "property");
    }
}
