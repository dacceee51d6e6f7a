//! Built-in coin compositions for types whose alloy never changed, plus the
//! undated defaults of the year-aware types.

use crate::types::{Metal, MetalComposition};

pub(crate) const CATALOG_ENTRIES: &[(&str, MetalComposition)] = &[
    // Silver dollars
    (
        "Morgan Dollar",
        MetalComposition::precious(
            "Morgan Dollar",
            Metal::Silver,
            0.77344,
            90.0,
            "Contains 0.77344 oz of silver (90% silver, 10% copper)",
        ),
    ),
    (
        "Peace Dollar",
        MetalComposition::precious(
            "Peace Dollar",
            Metal::Silver,
            0.77344,
            90.0,
            "Contains 0.77344 oz of silver (90% silver, 10% copper)",
        ),
    ),
    (
        "Eisenhower Dollar",
        MetalComposition::valueless(
            "Eisenhower Dollar",
            "Copper-nickel clad, no precious metal content",
        ),
    ),
    (
        "Seated Liberty Dollar",
        MetalComposition::precious(
            "Seated Liberty Dollar",
            Metal::Silver,
            0.77344,
            90.0,
            "Contains 0.77344 oz of silver (90% silver, 10% copper)",
        ),
    ),
    (
        "Trade Dollar",
        MetalComposition::precious(
            "Trade Dollar",
            Metal::Silver,
            0.78287,
            90.0,
            "Contains 0.78287 oz of silver (90% silver, 10% copper)",
        ),
    ),
    (
        "Bust Dollar",
        MetalComposition::precious(
            "Bust Dollar",
            Metal::Silver,
            0.77344,
            89.24,
            "Contains 0.77344 oz of silver (89.24% silver)",
        ),
    ),
    (
        "American Silver Eagle",
        MetalComposition::precious(
            "American Silver Eagle (1 oz)",
            Metal::Silver,
            1.0,
            99.9,
            "Contains 1 troy oz of pure silver (99.9% silver)",
        ),
    ),
    // Small-size dollars
    (
        "Susan B. Anthony Dollar",
        MetalComposition::valueless(
            "Susan B. Anthony Dollar",
            "Copper-nickel clad, no precious metal content",
        ),
    ),
    (
        "Sacagawea Dollar",
        MetalComposition::valueless(
            "Sacagawea Dollar",
            "Manganese brass, no precious metal content",
        ),
    ),
    // Half dollars
    (
        "Walking Liberty Half Dollar",
        MetalComposition::precious(
            "Walking Liberty Half Dollar",
            Metal::Silver,
            0.36169,
            90.0,
            "Contains 0.36169 oz of silver (90% silver, 10% copper)",
        ),
    ),
    (
        "Franklin Half Dollar",
        MetalComposition::precious(
            "Franklin Half Dollar",
            Metal::Silver,
            0.36169,
            90.0,
            "Contains 0.36169 oz of silver (90% silver, 10% copper)",
        ),
    ),
    (
        "Kennedy Half Dollar",
        MetalComposition::precious(
            "Kennedy Half Dollar (1964)",
            Metal::Silver,
            0.36169,
            90.0,
            "1964 only: 90% silver. 1965-1970: 40% silver. 1971+: no silver",
        ),
    ),
    (
        "Barber Half Dollar",
        MetalComposition::precious(
            "Barber Half Dollar",
            Metal::Silver,
            0.36169,
            90.0,
            "Contains 0.36169 oz of silver (90% silver, 10% copper)",
        ),
    ),
    (
        "Seated Liberty Half Dollar",
        MetalComposition::precious(
            "Seated Liberty Half Dollar",
            Metal::Silver,
            0.36169,
            90.0,
            "Contains 0.36169 oz of silver (90% silver, 10% copper)",
        ),
    ),
    (
        "Capped Bust Half Dollar",
        MetalComposition::precious(
            "Capped Bust Half Dollar",
            Metal::Silver,
            0.38570,
            89.24,
            "Contains 0.38570 oz of silver (89.24% silver)",
        ),
    ),
    (
        "Draped Bust Half Dollar",
        MetalComposition::precious(
            "Draped Bust Half Dollar",
            Metal::Silver,
            0.38570,
            89.24,
            "Contains 0.38570 oz of silver (89.24% silver)",
        ),
    ),
    // Quarters
    (
        "Washington Quarter",
        MetalComposition::precious(
            "Washington Quarter (Pre-1965)",
            Metal::Silver,
            0.18084,
            90.0,
            "Pre-1965 only: Contains 0.18084 oz of silver (90% silver)",
        ),
    ),
    (
        "Standing Liberty Quarter",
        MetalComposition::precious(
            "Standing Liberty Quarter",
            Metal::Silver,
            0.18084,
            90.0,
            "Contains 0.18084 oz of silver (90% silver, 10% copper)",
        ),
    ),
    (
        "Barber Quarter",
        MetalComposition::precious(
            "Barber Quarter",
            Metal::Silver,
            0.18084,
            90.0,
            "Contains 0.18084 oz of silver (90% silver, 10% copper)",
        ),
    ),
    (
        "Seated Liberty Quarter",
        MetalComposition::precious(
            "Seated Liberty Quarter",
            Metal::Silver,
            0.18084,
            90.0,
            "Contains 0.18084 oz of silver (90% silver, 10% copper)",
        ),
    ),
    (
        "Draped Bust Quarter",
        MetalComposition::precious(
            "Draped Bust Quarter",
            Metal::Silver,
            0.19285,
            89.24,
            "Contains 0.19285 oz of silver (89.24% silver)",
        ),
    ),
    (
        "Capped Bust Quarter",
        MetalComposition::precious(
            "Capped Bust Quarter",
            Metal::Silver,
            0.19285,
            89.24,
            "Contains 0.19285 oz of silver (89.24% silver)",
        ),
    ),
    // Dimes and smaller silver
    (
        "Mercury Dime",
        MetalComposition::precious(
            "Mercury Dime",
            Metal::Silver,
            0.07234,
            90.0,
            "Contains 0.07234 oz of silver (90% silver, 10% copper)",
        ),
    ),
    (
        "Roosevelt Dime",
        MetalComposition::precious(
            "Roosevelt Dime (Pre-1965)",
            Metal::Silver,
            0.07234,
            90.0,
            "Pre-1965 only: Contains 0.07234 oz of silver (90% silver)",
        ),
    ),
    (
        "Barber Dime",
        MetalComposition::precious(
            "Barber Dime",
            Metal::Silver,
            0.07234,
            90.0,
            "Contains 0.07234 oz of silver (90% silver, 10% copper)",
        ),
    ),
    (
        "Seated Liberty Half Dime",
        MetalComposition::precious(
            "Seated Liberty Half Dime",
            Metal::Silver,
            0.03617,
            90.0,
            "Contains 0.03617 oz of silver (90% silver, 10% copper)",
        ),
    ),
    (
        "Bust Half Dime",
        MetalComposition::precious(
            "Bust Half Dime",
            Metal::Silver,
            0.03617,
            89.24,
            "Contains 0.03617 oz of silver (89.24% silver)",
        ),
    ),
    (
        "Three Cent Silver",
        MetalComposition::precious(
            "Three Cent Silver (Trime)",
            Metal::Silver,
            0.02419,
            75.0,
            "Contains 0.02419 oz of silver (75% silver, 25% copper)",
        ),
    ),
    // Nickels
    (
        "Buffalo Nickel",
        MetalComposition::base_alloy(
            "Buffalo Nickel (1913-1938)",
            5.0,
            75.0,
            25.0,
            "75% copper, 25% nickel. No precious metal content - base metal only",
        ),
    ),
    (
        "Jefferson Nickel",
        MetalComposition::base_alloy(
            "Jefferson Nickel",
            5.0,
            75.0,
            25.0,
            "75% copper, 25% nickel (wartime 1942-1945: 35% silver). No precious metal content in regular strikes",
        ),
    ),
    (
        "Jefferson Nickel (Wartime Silver)",
        MetalComposition::precious(
            "Jefferson Nickel (1942-1945 Silver)",
            Metal::Silver,
            0.05626,
            35.0,
            "Wartime 1942-1945 with large mintmark above Monticello: 35% silver, 0.05626 oz",
        ),
    ),
    (
        "Liberty Nickel",
        MetalComposition::base_alloy(
            "Liberty Head Nickel (1883-1913)",
            5.0,
            75.0,
            25.0,
            "75% copper, 25% nickel. No precious metal content",
        ),
    ),
    (
        "Shield Nickel",
        MetalComposition::base_alloy(
            "Shield Nickel (1866-1883)",
            5.0,
            75.0,
            25.0,
            "75% copper, 25% nickel. No precious metal content",
        ),
    ),
    // Cents
    (
        "Indian Head Cent",
        MetalComposition::valueless(
            "Indian Head Cent",
            "95% copper, 5% tin and zinc. No precious metal content",
        ),
    ),
    (
        "Lincoln Cent",
        MetalComposition::valueless(
            "Lincoln Cent (Pre-1982)",
            "95% copper, 5% zinc. No precious metal content",
        ),
    ),
    (
        "Wheat Penny",
        MetalComposition::valueless(
            "Wheat Penny (1909-1958)",
            "95% copper, 5% tin and zinc. No precious metal content",
        ),
    ),
    (
        "Steel Penny",
        MetalComposition::valueless("Steel Penny (1943)", "Zinc-coated steel. No precious metal content"),
    ),
    // US gold
    (
        "American Gold Eagle (1 oz)",
        MetalComposition::precious(
            "American Gold Eagle (1 oz)",
            Metal::Gold,
            1.0,
            91.67,
            "Contains 1 troy oz of pure gold (22 karat, 91.67% gold)",
        ),
    ),
    (
        "American Gold Eagle (1/2 oz)",
        MetalComposition::precious(
            "American Gold Eagle (1/2 oz)",
            Metal::Gold,
            0.5,
            91.67,
            "Contains 0.5 troy oz of pure gold (22 karat)",
        ),
    ),
    (
        "American Gold Eagle (1/4 oz)",
        MetalComposition::precious(
            "American Gold Eagle (1/4 oz)",
            Metal::Gold,
            0.25,
            91.67,
            "Contains 0.25 troy oz of pure gold (22 karat)",
        ),
    ),
    (
        "American Gold Eagle (1/10 oz)",
        MetalComposition::precious(
            "American Gold Eagle (1/10 oz)",
            Metal::Gold,
            0.1,
            91.67,
            "Contains 0.1 troy oz of pure gold (22 karat)",
        ),
    ),
    (
        "American Buffalo (Gold)",
        MetalComposition::precious(
            "American Gold Buffalo (1 oz)",
            Metal::Gold,
            1.0,
            99.99,
            "Contains 1 troy oz of pure gold (99.99% gold - 24 karat)",
        ),
    ),
    (
        "$20 Liberty",
        MetalComposition::precious(
            "$20 Liberty Gold Coin",
            Metal::Gold,
            0.96750,
            90.0,
            "Contains 0.96750 oz of pure gold (90% gold)",
        ),
    ),
    (
        "$20 Saint Gaudens",
        MetalComposition::precious(
            "$20 Saint Gaudens",
            Metal::Gold,
            0.96750,
            90.0,
            "Contains 0.96750 oz of pure gold (90% gold)",
        ),
    ),
    (
        "$10 Liberty",
        MetalComposition::precious(
            "$10 Liberty Gold Coin",
            Metal::Gold,
            0.48375,
            90.0,
            "Contains 0.48375 oz of pure gold (90% gold)",
        ),
    ),
    (
        "$10 Indian",
        MetalComposition::precious(
            "$10 Indian Gold Coin",
            Metal::Gold,
            0.48375,
            90.0,
            "Contains 0.48375 oz of pure gold (90% gold)",
        ),
    ),
    (
        "$5 Liberty",
        MetalComposition::precious(
            "$5 Liberty Gold Coin",
            Metal::Gold,
            0.24187,
            90.0,
            "Contains 0.24187 oz of pure gold (90% gold)",
        ),
    ),
    (
        "$5 Indian",
        MetalComposition::precious(
            "$5 Indian Gold Coin",
            Metal::Gold,
            0.24187,
            90.0,
            "Contains 0.24187 oz of pure gold (90% gold)",
        ),
    ),
    (
        "$2.50 Liberty",
        MetalComposition::precious(
            "$2.50 Liberty Gold Coin",
            Metal::Gold,
            0.12094,
            90.0,
            "Contains 0.12094 oz of pure gold (90% gold)",
        ),
    ),
    (
        "$2.50 Indian",
        MetalComposition::precious(
            "$2.50 Indian Gold Coin",
            Metal::Gold,
            0.12094,
            90.0,
            "Contains 0.12094 oz of pure gold (90% gold)",
        ),
    ),
    (
        "$1 Liberty",
        MetalComposition::precious(
            "$1 Liberty Gold Coin",
            Metal::Gold,
            0.04837,
            90.0,
            "Contains 0.04837 oz of pure gold (90% gold)",
        ),
    ),
    // World bullion
    (
        "Canadian Maple Leaf (Gold)",
        MetalComposition::precious(
            "Canadian Gold Maple Leaf (1 oz)",
            Metal::Gold,
            1.0,
            99.99,
            "Contains 1 troy oz of pure gold (99.99% gold)",
        ),
    ),
    (
        "Canadian Maple Leaf (Silver)",
        MetalComposition::precious(
            "Canadian Silver Maple Leaf (1 oz)",
            Metal::Silver,
            1.0,
            99.99,
            "Contains 1 troy oz of pure silver (99.99% silver)",
        ),
    ),
    (
        "Krugerrand",
        MetalComposition::precious(
            "South African Krugerrand (1 oz)",
            Metal::Gold,
            1.0,
            91.67,
            "Contains 1 troy oz of pure gold (22 karat, 91.67% gold)",
        ),
    ),
    (
        "Vienna Philharmonic (Gold)",
        MetalComposition::precious(
            "Austrian Gold Philharmonic (1 oz)",
            Metal::Gold,
            1.0,
            99.99,
            "Contains 1 troy oz of pure gold (99.99% gold)",
        ),
    ),
    (
        "Britannia (Gold)",
        MetalComposition::precious(
            "British Gold Britannia (1 oz)",
            Metal::Gold,
            1.0,
            99.99,
            "Contains 1 troy oz of pure gold (99.99% gold)",
        ),
    ),
    (
        "Britannia (Silver)",
        MetalComposition::precious(
            "British Silver Britannia (1 oz)",
            Metal::Silver,
            1.0,
            99.9,
            "Contains 1 troy oz of pure silver (99.9% silver)",
        ),
    ),
];
