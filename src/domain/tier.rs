//! Tier - Flash NFT Levels
//!
//! The fixed ladder of 13 purchase levels. Cost and payout are in USDT and
//! known at startup; nothing here ever changes at runtime.

/// One Flash NFT purchase level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NftTier {
    /// Display name, also the lookup key
    pub name: &'static str,
    /// Purchase cost in USDT
    pub cost: u32,
    /// Guaranteed return in USDT
    pub payout: u32,
}

/// All Flash levels, in purchase order
pub static TIERS: [NftTier; 13] = [
    NftTier { name: "Flash 1", cost: 10, payout: 40 },
    NftTier { name: "Flash 2", cost: 20, payout: 80 },
    NftTier { name: "Flash 3", cost: 40, payout: 160 },
    NftTier { name: "Flash 4", cost: 80, payout: 320 },
    NftTier { name: "Flash 5", cost: 150, payout: 600 },
    NftTier { name: "Flash 6", cost: 250, payout: 1000 },
    NftTier { name: "Flash 7", cost: 450, payout: 1800 },
    NftTier { name: "Flash 8", cost: 800, payout: 3200 },
    NftTier { name: "Flash 9", cost: 1400, payout: 5600 },
    NftTier { name: "Flash 10", cost: 2500, payout: 10000 },
    NftTier { name: "Flash 11", cost: 3500, payout: 14000 },
    NftTier { name: "Flash 12", cost: 5000, payout: 20000 },
    NftTier { name: "Flash 13", cost: 10000, payout: 40000 },
];

/// Find a tier by name. Unknown names miss silently.
pub fn lookup(name: &str) -> Option<&'static NftTier> {
    TIERS.iter().find(|tier| tier.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thirteen_tiers() {
        assert_eq!(TIERS.len(), 13);
    }

    #[test]
    fn test_lookup_flash_5() {
        let tier = lookup("Flash 5").expect("Flash 5 exists");
        assert_eq!(tier.cost, 150);
        assert_eq!(tier.payout, 600);
    }

    #[test]
    fn test_lookup_unknown_misses() {
        assert!(lookup("Flash 14").is_none());
        assert!(lookup("").is_none());
    }

    #[test]
    fn test_payout_is_four_times_cost() {
        for tier in &TIERS {
            assert_eq!(tier.payout, tier.cost * 4, "{}", tier.name);
        }
    }
}
