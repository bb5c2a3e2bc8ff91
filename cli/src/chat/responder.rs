//! # Canned Chat Responder
//!
//! File: cli/src/chat/responder.rs
//!
//! ## Overview
//!
//! Picks a reply for a chat widget message. A fixed, ordered list of keyword
//! rules decides the reply category; a reply is then drawn uniformly at random
//! from that category's variants. The random source is a parameter so tests
//! can pass a seeded `StdRng`.
//!
//! Rule order (first match wins, case-insensitive substring match):
//! 1. Greeting, only on the first turn of a session
//! 2. Chatbot, Email, Web, Automation topics
//! 3. Pricing
//! 4. Timeline
//! 5. Re-engagement, after three turns in which no reply asked the visitor anything
//! 6. Default
//!
//! Keywords match anywhere in the lower-cased message, so "web" also matches
//! "webinar" and "hi" matches "this".
//!
use rand::Rng;

/// A reply category. Each has a fixed, non-empty list of variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Greeting,
    Chatbot,
    Email,
    Web,
    Automation,
    Pricing,
    Timeline,
    ReEngagement,
    Default,
}

/// An earlier exchange in the same session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriorTurn<'a> {
    pub message: &'a str,
    pub response: Option<&'a str>,
}

const GREETING_KEYWORDS: &[&str] = &[
    "hi",
    "hello",
    "hey",
    "good morning",
    "good afternoon",
    "good evening",
];

/// Keyword rules after the greeting, in evaluation order.
const KEYWORD_RULES: &[(Category, &[&str])] = &[
    (Category::Chatbot, &["chatbot", "chat bot", "ai bot"]),
    (Category::Email, &["email", "marketing"]),
    (Category::Web, &["web", "website", "3d"]),
    (Category::Automation, &["automation", "growth"]),
    (Category::Pricing, &["price", "cost", "how much"]),
    (Category::Timeline, &["how long", "timeline", "when"]),
];

/// A prior reply containing any of these counts as having asked the visitor something.
const QUESTION_MARKERS: &[&str] = &["?", "Would you like", "What"];

/// Greetings only apply up to this many turns.
const GREETING_MAX_TURNS: usize = 1;

/// Re-engagement only applies past this many turns.
const RE_ENGAGEMENT_MIN_TURNS: usize = 3;

const GREETING_RESPONSES: &[&str] = &[
    "Hello! Welcome to 0to1 Automation. I'm here to help you discover how our AI-powered solutions can transform your business. What would you like to know?",
    "Hi there! Thanks for reaching out. I'd love to tell you about our automation services that have helped businesses increase efficiency by up to 300%. What's your biggest business challenge right now?",
    "Hey! Great to meet you. We specialize in AI chatbots, email marketing automation, and 3D web development. Which area interests you most?",
];

const CHATBOT_RESPONSES: &[&str] = &[
    "Our AI Chatbots are game-changers! They handle 80% of customer inquiries automatically, work 24/7, and can reduce your support costs by 60%. They're trained on your specific business knowledge and integrate seamlessly with your existing systems. Would you like to see a demo?",
    "AI Chatbots are perfect for scaling customer support! Our clients typically see 40% faster response times and 25% higher customer satisfaction. The chatbot learns from every interaction and gets smarter over time. What kind of customer questions do you handle most often?",
    "Smart choice! Our chatbots can handle everything from basic FAQs to complex product recommendations. They're like having a super-efficient team member who never sleeps. Plus, they capture valuable customer data for insights. What's your current customer support setup like?",
];

const EMAIL_RESPONSES: &[&str] = &[
    "Email Marketing Automation is where the magic happens! We create personalized customer journeys that adapt based on behavior. Our clients see average conversion increases of 65% and revenue boosts of 40%. It's like having a marketing team that works while you sleep. What's your current email strategy?",
    "Email automation is incredibly powerful! We set up triggered sequences, behavioral targeting, and advanced segmentation. One client increased their email revenue by 180% in just 3 months. The system sends the right message to the right person at exactly the right time. How many email subscribers do you currently have?",
    "Perfect timing! Email marketing automation can nurture leads automatically, recover abandoned carts, and re-engage inactive customers. We use AI to optimize send times, subject lines, and content for each individual subscriber. What's your biggest email marketing challenge right now?",
];

const WEB_RESPONSES: &[&str] = &[
    "3D Web Development is the future! Our immersive websites increase visitor engagement by 200% and time-on-site by 150%. We create stunning visual experiences with interactive elements that make your brand unforgettable. Think of it as your digital showroom that works 24/7. What kind of business do you have?",
    "Amazing choice! 3D websites aren't just beautiful - they convert better too. Our clients see 85% higher conversion rates compared to traditional sites. We use cutting-edge technology to create smooth, fast-loading experiences that work perfectly on all devices. What's your vision for your website?",
    "3D web development is our specialty! We create websites that feel like interactive experiences rather than static pages. Visitors can explore products in 3D, navigate through immersive environments, and engage with your brand in entirely new ways. It's like bringing your physical space online. What industry are you in?",
];

const AUTOMATION_RESPONSES: &[&str] = &[
    "Growth Automation is a total game-changer! We automate everything from lead capture to customer onboarding, social media posting to follow-up sequences. Our clients typically save 15-20 hours per week and see 30% faster business growth. It's like cloning your best employees. What processes take up most of your time?",
    "Business automation is incredible for scaling! We create systems that handle repetitive tasks, qualify leads automatically, and nurture customers through personalized journeys. One client automated 70% of their sales process and doubled their revenue. What's currently eating up most of your daily time?",
    "Smart thinking! Growth automation connects all your business processes into one smooth system. From the moment someone visits your website to becoming a loyal customer - everything happens automatically. We've helped businesses reduce manual work by 80% while growing faster than ever. What's your biggest operational challenge?",
];

const PRICING_RESPONSES: &[&str] = &[
    "Great question! Our pricing depends on your specific needs and goals. We offer flexible packages starting from basic automation setups to comprehensive digital transformation. Most clients see ROI within 2-3 months. I'd love to understand your requirements better to give you accurate pricing. What's your budget range and main objectives?",
    "Investment varies based on scope, but think of it as hiring a digital team that works 24/7 for a fraction of the cost. Our solutions typically pay for themselves within 90 days through increased efficiency and revenue. Should we schedule a free consultation to discuss your specific needs and create a custom quote?",
    "Pricing is tailored to each business because every automation need is different. We have solutions for startups to enterprise companies. The best part? Most clients save more in operational costs than they spend on our services. Want to hop on a quick call to discuss your specific situation?",
];

const TIMELINE_RESPONSES: &[&str] = &[
    "Great question! Timeline depends on complexity, but most projects launch within 2-6 weeks. Simple chatbot implementations can be live in 1-2 weeks, while comprehensive automation systems take 4-8 weeks. We work in phases so you start seeing results quickly. What's your ideal launch timeline?",
    "We move fast! Basic setups can be completed in 1-2 weeks, while full automation systems typically take 3-6 weeks. We prioritize the highest-impact features first so you start seeing ROI immediately. Plus, we provide training and ongoing support. When would you ideally like to get started?",
    "Speed is our strength! Most clients are amazed how quickly we deliver results. Simple projects take 1-2 weeks, complex ones 4-8 weeks. We break everything into phases so you're not waiting months to see benefits. What's driving your timeline requirements?",
];

const RE_ENGAGEMENT_RESPONSES: &[&str] = &[
    "I'd love to learn more about your specific situation! Every business is unique, and I want to make sure I'm giving you the most relevant information. What's your biggest business challenge right now that automation could help solve?",
    "You seem interested in our services! To give you the best recommendations, could you tell me a bit about your business? What industry are you in and what are your main goals?",
    "Great conversation! I think our solutions could be perfect for your needs. Would you like to schedule a free 15-minute consultation where we can dive deeper into your specific requirements and show you exactly how we can help?",
];

const DEFAULT_RESPONSES: &[&str] = &[
    "I'm here to help you discover how automation can transform your business! Whether it's AI chatbots, email marketing, 3D websites, or growth automation - we have solutions that deliver real results. What specific challenge are you looking to solve?",
    "Thanks for reaching out! We specialize in helping businesses automate and grow through AI-powered solutions. Our clients typically see significant improvements in efficiency, customer engagement, and revenue. What aspect of your business would you most like to improve?",
    "I'd love to help you explore our automation services! We've helped hundreds of businesses streamline operations, boost sales, and create amazing customer experiences. What's the most time-consuming part of running your business right now?",
    "Great to connect with you! 0to1 Automation creates custom solutions that work while you focus on what matters most. Whether you need better customer support, more effective marketing, or a stunning website - we've got you covered. What's your biggest priority right now?",
];

impl Category {
    pub fn variants(self) -> &'static [&'static str] {
        match self {
            Category::Greeting => GREETING_RESPONSES,
            Category::Chatbot => CHATBOT_RESPONSES,
            Category::Email => EMAIL_RESPONSES,
            Category::Web => WEB_RESPONSES,
            Category::Automation => AUTOMATION_RESPONSES,
            Category::Pricing => PRICING_RESPONSES,
            Category::Timeline => TIMELINE_RESPONSES,
            Category::ReEngagement => RE_ENGAGEMENT_RESPONSES,
            Category::Default => DEFAULT_RESPONSES,
        }
    }
}

/// Decides which category answers `message`.
///
/// `turn_count` is the number of messages in the session including this one;
/// `history` holds the session's earlier exchanges.
pub fn classify(message: &str, turn_count: usize, history: &[PriorTurn<'_>]) -> Category {
    let lowered = message.to_lowercase();
    let mentions = |keywords: &[&str]| keywords.iter().any(|keyword| lowered.contains(keyword));

    if turn_count <= GREETING_MAX_TURNS && mentions(GREETING_KEYWORDS) {
        return Category::Greeting;
    }
    if let Some(&(category, _)) = KEYWORD_RULES
        .iter()
        .find(|&&(_, keywords)| mentions(keywords))
    {
        return category;
    }
    if turn_count > RE_ENGAGEMENT_MIN_TURNS && !has_asked_visitor(history) {
        return Category::ReEngagement;
    }
    Category::Default
}

fn has_asked_visitor(history: &[PriorTurn<'_>]) -> bool {
    history
        .iter()
        .filter_map(|turn| turn.response)
        .any(|response| QUESTION_MARKERS.iter().any(|marker| response.contains(marker)))
}

/// Picks a reply for `message`. Never fails and never returns an empty string.
pub fn generate_response<R: Rng>(
    message: &str,
    turn_count: usize,
    history: &[PriorTurn<'_>],
    rng: &mut R,
) -> String {
    let variants = classify(message, turn_count, history).variants();
    variants[rng.random_range(0..variants.len())].to_string()
}
