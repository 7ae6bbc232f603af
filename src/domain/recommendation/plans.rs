//! Static action plans and success metrics per dimension.

use crate::domain::foundation::Dimension;

/// Action plan plus success-metric checklist for a dimension.
pub struct Playbook {
    pub action_plan: &'static [&'static str],
    pub success_metrics: &'static [&'static str],
}

const PROBLEM_CLARITY: Playbook = Playbook {
    action_plan: &[
        "Rewrite the problem statement as one sentence naming who, what, and when",
        "Attach at least three quantified data points (time lost, money lost, frequency)",
        "State the causal chain explicitly: what causes the problem and what it causes",
    ],
    success_metrics: &[
        "Problem statement fits in two sentences and names a specific role",
        "Three or more metrics appear in the statement",
        "A reader can repeat the cause-and-effect chain back to you",
    ],
};

const MARKET_UNDERSTANDING: Playbook = Playbook {
    action_plan: &[
        "Size the market top-down (TAM/SAM/SOM) and bottom-up from target accounts",
        "Find one credible growth number for the category (analyst report or public filings)",
        "Explain why the timing window is open now rather than in two years",
    ],
    success_metrics: &[
        "A dollar-denominated market size with a named source",
        "Growth rate cited with a timeframe",
        "A one-paragraph timing argument a skeptic accepts",
    ],
};

const CUSTOMER_EMPATHY: Playbook = Playbook {
    action_plan: &[
        "Run 15 structured problem interviews with the exact target role",
        "Segment interviewees by company size and record which segments feel the pain most",
        "Pilot with two design partners and measure one before/after outcome",
    ],
    success_metrics: &[
        "Interview count reaches 25 or more with notes per conversation",
        "At least two named segments with differing pain intensity",
        "One pilot outcome expressed as a multiple or percentage",
    ],
};

const VALUE_QUANTIFICATION: Playbook = Playbook {
    action_plan: &[
        "Calculate the cost of the problem per affected account per month",
        "Express the impact in at least two currencies of pain: dollars and hours",
        "Validate the figures with two customers willing to confirm them on a call",
    ],
    success_metrics: &[
        "A defensible dollar figure for the cost of inaction",
        "Two distinct quantified impact statements",
        "Customer-confirmed numbers rather than internal estimates",
    ],
};

const SOLUTION_DIFFERENTIATION: Playbook = Playbook {
    action_plan: &[
        "List every alternative customers use today, including spreadsheets and doing nothing",
        "Document what each alternative fails to do, in the customer's words",
        "Write the positioning sentence: for whom, against what, and why better",
    ],
    success_metrics: &[
        "An alternatives table with at least four entries",
        "Three customer-voiced gaps in current solutions",
        "A positioning sentence tested on five prospects",
    ],
};

/// Fallback three-step template for dimensions without a tailored plan.
const GENERIC: Playbook = Playbook {
    action_plan: &[
        "Gather primary evidence for this dimension from customers",
        "Quantify the two most important claims",
        "Review with an advisor and revise the worksheet",
    ],
    success_metrics: &[
        "Evidence documented with sources",
        "Key claims carry numbers",
        "Worksheet revision reviewed externally",
    ],
};

/// GTM-foundation playbook used by the strategic recommendation.
pub const GTM_FOUNDATION: Playbook = Playbook {
    action_plan: &[
        "Write a one-page GTM thesis: target segment, problem, and wedge",
        "Pick a single acquisition channel to test for four weeks",
        "Define the three metrics that would prove the wedge is working",
    ],
    success_metrics: &[
        "One-page thesis shared with the team",
        "Channel experiment shipped with weekly numbers",
        "Three wedge metrics tracked from week one",
    ],
};

/// Returns the playbook for a dimension.
pub fn playbook(dimension: Dimension) -> &'static Playbook {
    match dimension {
        Dimension::ProblemClarity => &PROBLEM_CLARITY,
        Dimension::MarketUnderstanding => &MARKET_UNDERSTANDING,
        Dimension::CustomerEmpathy => &CUSTOMER_EMPATHY,
        Dimension::ValueQuantification => &VALUE_QUANTIFICATION,
        Dimension::SolutionDifferentiation => &SOLUTION_DIFFERENTIATION,
    }
}

/// Returns the generic fallback playbook.
pub fn generic_playbook() -> &'static Playbook {
    &GENERIC
}
