//! Compiled-in message catalog.
//!
//! The table is immutable and ordered by id. Lookups for ids outside the
//! table return `None`; there is no fallback record.

use crate::types::{Category, MessageId, MessageRecord};

/// Number of messages in the catalog.
pub const CATALOG_SIZE: usize = 45;

static MESSAGES: [MessageRecord; CATALOG_SIZE] = [
    MessageRecord {
        id: 1,
        day: 1,
        category: Category::Reward,
        text: "Merry Christmas Princess! Before you, my life felt stuffy and closed in. Then you came along and became my breath of fresh air - filling my world with light, love, and joy. Today, let me give you a breath of fresh air: 1 hour all to yourself. Me and the older boys have the younger two covered. Go enjoy, relax, and breathe. You deserve it. ❤️",
        reward_details: Some("1 hour break - we babysit the younger kids"),
    },
    MessageRecord {
        id: 2,
        day: 2,
        category: Category::Affirmation,
        text: "Your smile lights up my world in ways words cannot express. Never forget how beautiful you are, inside and out.",
        reward_details: None,
    },
    MessageRecord {
        id: 3,
        day: 3,
        category: Category::Bond,
        text: "Remember our first date? I knew then that you were someone special. Every day since has only confirmed it.",
        reward_details: None,
    },
    MessageRecord {
        id: 4,
        day: 4,
        category: Category::Reward,
        text: "REWARD: One full hour back massage - no questions asked, whenever you want it!",
        reward_details: Some("One hour back massage"),
    },
    MessageRecord {
        id: 5,
        day: 5,
        category: Category::Affirmation,
        text: "You are stronger than you know, braver than you believe, and more loved than you can imagine.",
        reward_details: None,
    },
    MessageRecord {
        id: 6,
        day: 6,
        category: Category::Bond,
        text: "I love how we can talk about anything and everything. Your mind fascinates me as much as your heart captivates me.",
        reward_details: None,
    },
    MessageRecord {
        id: 7,
        day: 7,
        category: Category::Affirmation,
        text: "Your kindness makes the world a better place. Thank you for being the most caring person I know.",
        reward_details: None,
    },
    MessageRecord {
        id: 8,
        day: 8,
        category: Category::Reward,
        text: "REWARD: Your choice of restaurant - date night is on me, anywhere you want!",
        reward_details: Some("Date night at restaurant of your choice"),
    },
    MessageRecord {
        id: 9,
        day: 9,
        category: Category::Affirmation,
        text: "Every challenge you face, you handle with such grace. I admire your strength more than you know.",
        reward_details: None,
    },
    MessageRecord {
        id: 10,
        day: 10,
        category: Category::Bond,
        text: "The way you laugh at my terrible jokes is one of my favorite things in the world. Never stop being you.",
        reward_details: None,
    },
    MessageRecord {
        id: 11,
        day: 11,
        category: Category::Affirmation,
        text: "You deserve all the happiness in the world. I am so lucky to be the one who gets to try to give it to you.",
        reward_details: None,
    },
    MessageRecord {
        id: 12,
        day: 12,
        category: Category::Reward,
        text: "REWARD: Breakfast in bed - your favorite meal, made with love!",
        reward_details: Some("Breakfast in bed"),
    },
    MessageRecord {
        id: 13,
        day: 13,
        category: Category::Bond,
        text: "I love how safe I feel with you. You are my home, my peace, my everything.",
        reward_details: None,
    },
    MessageRecord {
        id: 14,
        day: 14,
        category: Category::Affirmation,
        text: "Your intelligence and wisdom never cease to amaze me. You make me want to be better every day.",
        reward_details: None,
    },
    MessageRecord {
        id: 15,
        day: 15,
        category: Category::Bond,
        text: "Remember when we stayed up all night just talking? I would do that every night if I could. You are my favorite person.",
        reward_details: None,
    },
    MessageRecord {
        id: 16,
        day: 16,
        category: Category::Reward,
        text: "REWARD: Movie night marathon - your choice of movies, I provide the snacks and cuddles!",
        reward_details: Some("Movie night marathon with snacks"),
    },
    MessageRecord {
        id: 17,
        day: 17,
        category: Category::Affirmation,
        text: "You have a heart of gold. The way you care for others inspires me to be more compassionate.",
        reward_details: None,
    },
    MessageRecord {
        id: 18,
        day: 18,
        category: Category::Bond,
        text: "I love the little moments with you - cooking together, lazy Sundays, quiet mornings. Those are my treasures.",
        reward_details: None,
    },
    MessageRecord {
        id: 19,
        day: 19,
        category: Category::Affirmation,
        text: "You are capable of achieving anything you set your mind to. I believe in you completely.",
        reward_details: None,
    },
    MessageRecord {
        id: 20,
        day: 20,
        category: Category::Reward,
        text: "REWARD: Full day of no chores - I will handle everything while you relax!",
        reward_details: Some("Full day off from chores"),
    },
    MessageRecord {
        id: 21,
        day: 21,
        category: Category::Bond,
        text: "The sound of your voice is my favorite sound. Your laughter is my favorite song.",
        reward_details: None,
    },
    MessageRecord {
        id: 22,
        day: 22,
        category: Category::Affirmation,
        text: "You make everything better just by being you. Your presence is a gift I never take for granted.",
        reward_details: None,
    },
    MessageRecord {
        id: 23,
        day: 23,
        category: Category::Bond,
        text: "I love how we can communicate without words. One look and I know exactly what you are thinking.",
        reward_details: None,
    },
    MessageRecord {
        id: 24,
        day: 24,
        category: Category::Reward,
        text: "REWARD: Spa day at home - bubble bath, candles, face masks, the works!",
        reward_details: Some("Home spa day"),
    },
    MessageRecord {
        id: 25,
        day: 25,
        category: Category::Affirmation,
        text: "Your dreams matter. Your goals matter. You matter. Never let anyone make you feel otherwise.",
        reward_details: None,
    },
    MessageRecord {
        id: 26,
        day: 26,
        category: Category::Bond,
        text: "Thank you for choosing me every day. Thank you for your patience, your love, your everything.",
        reward_details: None,
    },
    MessageRecord {
        id: 27,
        day: 27,
        category: Category::Affirmation,
        text: "You are more than enough. You have always been enough. You will always be enough.",
        reward_details: None,
    },
    MessageRecord {
        id: 28,
        day: 28,
        category: Category::Reward,
        text: "REWARD: Shopping spree - pick something you have been wanting, my treat!",
        reward_details: Some("Shopping spree gift"),
    },
    MessageRecord {
        id: 29,
        day: 29,
        category: Category::Bond,
        text: "I love watching you pursue your passions. Seeing you happy makes my heart full.",
        reward_details: None,
    },
    MessageRecord {
        id: 30,
        day: 30,
        category: Category::Affirmation,
        text: "You are a work of art. Every part of you is beautiful, from your mind to your soul to your smile.",
        reward_details: None,
    },
    MessageRecord {
        id: 31,
        day: 31,
        category: Category::Bond,
        text: "Being with you feels like home. No matter where we are, if you are there, I am home.",
        reward_details: None,
    },
    MessageRecord {
        id: 32,
        day: 32,
        category: Category::Reward,
        text: "REWARD: Foot massage while we watch your favorite show!",
        reward_details: Some("Foot massage TV session"),
    },
    MessageRecord {
        id: 33,
        day: 33,
        category: Category::Affirmation,
        text: "Your love has made me a better person. Thank you for seeing the best in me.",
        reward_details: None,
    },
    MessageRecord {
        id: 34,
        day: 34,
        category: Category::Bond,
        text: "I love the way you dance when you think no one is watching. I love all your quirks.",
        reward_details: None,
    },
    MessageRecord {
        id: 35,
        day: 35,
        category: Category::Affirmation,
        text: "You are worthy of all the love, joy, and success in the world. Do not ever doubt that.",
        reward_details: None,
    },
    MessageRecord {
        id: 36,
        day: 36,
        category: Category::Reward,
        text: "REWARD: Surprise date night - let me plan everything, you just show up looking gorgeous (which you always do)!",
        reward_details: Some("Surprise date night"),
    },
    MessageRecord {
        id: 37,
        day: 37,
        category: Category::Bond,
        text: "Thank you for being my partner in everything. Life with you is the greatest adventure.",
        reward_details: None,
    },
    MessageRecord {
        id: 38,
        day: 38,
        category: Category::Affirmation,
        text: "Your resilience amazes me. No matter what life throws at you, you rise above it.",
        reward_details: None,
    },
    MessageRecord {
        id: 39,
        day: 39,
        category: Category::Bond,
        text: "I love growing old with you. Every wrinkle, every gray hair, every year makes you more beautiful to me.",
        reward_details: None,
    },
    MessageRecord {
        id: 40,
        day: 40,
        category: Category::Reward,
        text: "REWARD: Lazy Sunday - we stay in pajamas all day, order takeout, and do absolutely nothing!",
        reward_details: Some("Lazy Sunday in pajamas"),
    },
    MessageRecord {
        id: 41,
        day: 41,
        category: Category::Affirmation,
        text: "You are the strongest person I know. Your courage inspires me every single day.",
        reward_details: None,
    },
    MessageRecord {
        id: 42,
        day: 42,
        category: Category::Bond,
        text: "I fall in love with you more every day. Thank you for being my forever.",
        reward_details: None,
    },
    MessageRecord {
        id: 43,
        day: 43,
        category: Category::Affirmation,
        text: "You are exactly who you are supposed to be. Perfect in your imperfections.",
        reward_details: None,
    },
    MessageRecord {
        id: 44,
        day: 44,
        category: Category::Reward,
        text: "REWARD: Your choice of surprise gift - tell me what you have been wanting!",
        reward_details: Some("Surprise gift of your choice"),
    },
    MessageRecord {
        id: 45,
        day: 45,
        category: Category::Bond,
        text: "These 45 days are just the beginning. I will spend the rest of my life showing you how much I love you. You are my everything. ❤️",
        reward_details: None,
    },
];

/// All catalog records in id order.
pub fn all() -> &'static [MessageRecord] {
    &MESSAGES
}

/// Look up a message by id.
pub fn lookup(id: MessageId) -> Option<&'static MessageRecord> {
    MESSAGES.iter().find(|m| m.id == id)
}

/// Every message id in the catalog, ascending.
pub fn ids() -> impl Iterator<Item = MessageId> {
    MESSAGES.iter().map(|m| m.id)
}

/// Reward-category records only.
pub fn rewards() -> impl Iterator<Item = &'static MessageRecord> {
    MESSAGES.iter().filter(|m| m.is_reward())
}

/// Records whose intended sequence day is on or before `day`.
pub fn up_to_day(day: u32) -> impl Iterator<Item = &'static MessageRecord> {
    MESSAGES.iter().filter(move |m| m.day <= day)
}
