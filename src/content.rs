//! Copy shown on the landing pages.

/// Login page of the trading dashboard, target of every "get funded" CTA.
pub const DASHBOARD_URL: &str = "https://dashboard.goldstonex.com/login";

/// The fixed promotional strip on top of the instant-funding page.
#[derive(Debug, Clone, Copy)]
pub struct PromoBanner {
    pub tag: &'static str,
    pub code: &'static str,
    pub text: &'static str,
}

pub const PROMO_BANNER: PromoBanner = PromoBanner {
    tag: "Special Deal",
    code: "Instant30",
    text: "Get 30% OFF all Instant Funding Challenges",
};

#[derive(Debug, Clone, Copy)]
pub struct PricingPlan {
    pub size: &'static str,
    pub fee: &'static str,
    pub split: &'static str,
    pub max_loss: &'static str,
    pub daily_loss: &'static str,
}

impl PricingPlan {
    /// Name of the event fired when this plan's CTA is clicked,
    /// e.g. `pricing_5000_click` for the `$5,000` plan.
    pub fn click_event(&self) -> String {
        let digits: String = self.size.chars().filter(char::is_ascii_digit).collect();
        format!("pricing_{digits}_click")
    }
}

pub const PRICING_PLANS: [PricingPlan; 5] = [
    PricingPlan {
        size: "$5,000",
        fee: "$79.90",
        split: "80/20",
        max_loss: "5%",
        daily_loss: "3%",
    },
    PricingPlan {
        size: "$10,000",
        fee: "$119.90",
        split: "80/20",
        max_loss: "5%",
        daily_loss: "3%",
    },
    PricingPlan {
        size: "$25,000",
        fee: "$239.90",
        split: "80/20",
        max_loss: "5%",
        daily_loss: "3%",
    },
    PricingPlan {
        size: "$50,000",
        fee: "$329.90",
        split: "80/20",
        max_loss: "5%",
        daily_loss: "3%",
    },
    PricingPlan {
        size: "$100,000",
        fee: "$549.90",
        split: "80/20",
        max_loss: "5%",
        daily_loss: "3%",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Step {
    pub title: &'static str,
    pub description: &'static str,
}

pub const INSTANT_FUNDING_STEPS: [Step; 4] = [
    Step {
        title: "Select Your Capital Level",
        description: "Choose from $10k to $200k account sizes. Pick the capital level that matches your trading style and experience.",
    },
    Step {
        title: "Complete Quick Security Check",
        description: "Verify your identity with a simple, fast security check. No lengthy evaluations or waiting periods.",
    },
    Step {
        title: "Start Trading Live",
        description: "Access your live trading account immediately. Start trading with real capital right away.",
    },
    Step {
        title: "Scale & Withdraw Profits",
        description: "Grow your account and request payouts. Scale up to multi-million dollar capital as you prove consistency.",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct ScalingStep {
    pub milestone: &'static str,
    pub from: &'static str,
    pub capital: &'static str,
}

pub const SCALING_PLAN: [ScalingStep; 7] = [
    ScalingStep { milestone: "10% Profit", from: "$10,000", capital: "$20,000" },
    ScalingStep { milestone: "10% Profit", from: "$25,000", capital: "$50,000" },
    ScalingStep { milestone: "10% Profit", from: "$50,000", capital: "$100,000" },
    ScalingStep { milestone: "10% Profit", from: "$100,000", capital: "$200,000" },
    ScalingStep { milestone: "10% Profit", from: "$200,000", capital: "$400,000" },
    ScalingStep { milestone: "10% Profit", from: "$400,000", capital: "$1,000,000" },
    ScalingStep { milestone: "10% Profit", from: "$1,000,000", capital: "$2,500,000" },
];

#[derive(Debug, Clone, Copy)]
pub struct Comparison {
    pub feature: &'static str,
    pub us: &'static str,
    pub them: &'static str,
}

pub const COMPARISON: [Comparison; 4] = [
    Comparison { feature: "Time to Start Trading", us: "Instant", them: "30-60 days" },
    Comparison { feature: "Evaluation Phase", us: "None", them: "Required" },
    Comparison { feature: "Time Limits", us: "None", them: "Strict deadlines" },
    Comparison { feature: "Profit Split", us: "Up to 90%", them: "50-80%" },
];

#[derive(Debug, Clone, Copy)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

pub const HOME_FEATURES: [Feature; 6] = [
    Feature { title: "No Hidden Rules", description: "No sudden resets" },
    Feature { title: "Bi-weekly Payouts", description: "Receive profits every 2 weeks" },
    Feature { title: "Transparent Risk Rules", description: "10% max loss / 5% daily" },
    Feature { title: "Trade Your Strategy", description: "Trade under real execution" },
    Feature { title: "No Restart Penalty", description: "Earn as you grow" },
    Feature { title: "Freedom to Scale", description: "No complex conditions" },
];

pub const HOME_STEPS: [Step; 3] = [
    Step {
        title: "Get Instant Access",
        description: "Sign up with your email to unlock your free evaluation starter guide, pricing tiers, and early offers.",
    },
    Step {
        title: "Trade Under Real Conditions",
        description: "Follow transparent risk rules with no time limit on your evaluation.",
    },
    Step {
        title: "Unlock Funding & Withdraw Profits",
        description: "Pass the evaluation, get funded and receive bi-weekly payouts.",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Testimonial {
    pub quote: &'static str,
    pub initials: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

pub const HOME_TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "Finally, a prop firm that actually gives traders time to grow. No rush, no trick rules.",
        initials: "DR",
        author: "Daniel R.",
        role: "Futures Trader",
    },
    Testimonial {
        quote: "I passed without stress because there was no countdown. That changes everything.",
        initials: "EK",
        author: "Emily K.",
        role: "Forex Trader",
    },
    Testimonial {
        quote: "Bi-weekly payouts with 90% split made it feel like a real income stream.",
        initials: "MC",
        author: "Michael C.",
        role: "Funded Trader",
    },
];
