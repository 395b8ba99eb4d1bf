use serde::Serialize;
use crate::scoring::PersonalityType;
use crate::submission::{LabelSource, QuizOutcome};

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersonalityProfile {
    pub emoji: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub traits: [&'static str; 6],
    pub did_you_know: &'static str,
}

static INTROVERT: PersonalityProfile = PersonalityProfile {
    emoji: "🌙",
    title: "Introvert",
    subtitle: "The Thoughtful Observer",
    description: "You tend to recharge through solitude and prefer deeper, meaningful connections over large social gatherings. You think before you speak and often have rich inner worlds.",
    traits: [
        "Prefers quiet environments",
        "Thinks before speaking",
        "Values deep relationships",
        "Enjoys solitary activities",
        "Observant and reflective",
        "Comfortable with silence",
    ],
    did_you_know: "About 25-40% of the population are introverts. Famous introverts include Albert Einstein, J.K. Rowling, and Bill Gates!",
};

static EXTROVERT: PersonalityProfile = PersonalityProfile {
    emoji: "🌞",
    title: "Extrovert",
    subtitle: "The Social Energizer",
    description: "You gain energy from social interactions and tend to think out loud. You enjoy being around people and are often comfortable being the center of attention.",
    traits: [
        "Energized by social interaction",
        "Thinks out loud",
        "Enjoys group activities",
        "Comfortable in crowds",
        "Expressive and outgoing",
        "Quick to share ideas",
    ],
    did_you_know: "About 60-75% of the population are extroverts. Famous extroverts include Oprah Winfrey, Robin Williams, and Richard Branson!",
};

pub fn profile(label: PersonalityType) -> &'static PersonalityProfile {
    match label {
        PersonalityType::Introvert => &INTROVERT,
        PersonalityType::Extrovert => &EXTROVERT,
    }
}

pub fn share_message(label: PersonalityType) -> String {
    format!("I just discovered I'm a {} on PersonaSense! ✨", label)
}

/// Share text for hosts without a native share sheet; carries the link inline.
pub fn share_fallback_text(label: PersonalityType, url: &str) -> String {
    format!("{} Check it out at {}", share_message(label), url)
}

/// Plain-text results page.
pub fn render_results(outcome: &QuizOutcome) -> String {
    let result = &outcome.result;
    let profile = profile(result.label);
    let mut page = String::new();

    page.push_str(&format!("\n{}  Your Personality Type\n", profile.emoji));
    page.push_str(&format!("   {}\n", profile.title));
    page.push_str(&format!("   {}\n\n", profile.subtitle));
    page.push_str("What This Means\n");
    page.push_str(&format!("   {}\n\n", profile.description));
    page.push_str("Your Key Traits\n");
    for item in profile.traits.iter() {
        page.push_str(&format!("   • {}\n", item));
    }

    if result.source == LabelSource::Remote {
        page.push_str("\n🎯 AI Prediction Confidence\n");
        if let Some(confidence) = result.confidence {
            page.push_str(&format!(
                "   Our AI model is {}% confident in this prediction based on your responses!\n",
                confidence
            ));
        }
        if let Some(user_id) = result.user_id() {
            let short: String = user_id.chars().take(8).collect();
            page.push_str(&format!("   User ID: {}...\n", short));
        }
    }

    page.push_str("\n💡 Did You Know?\n");
    page.push_str(&format!("   {}\n\n", profile.did_you_know));
    page.push_str("Remember, personality types are just one way to understand yourself.\n");
    page.push_str("You're unique and can have traits from both types! ✨\n");
    page
}
