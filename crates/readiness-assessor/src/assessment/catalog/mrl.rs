use super::super::domain::Level;

// Only the primary locale ships market-readiness content; other locales fall back to it.
pub(super) fn english() -> Vec<Level> {
    vec![
        Level::new(
            1,
            "Market Need Identification",
            &[
                "Has a specific market problem or unmet need been clearly identified?",
                "Is there preliminary evidence that the identified need is significant and widespread?",
                "Have initial market pain points been documented through observations or informal discussions?",
                "Is there awareness of existing solutions and their limitations in addressing the identified need?",
            ],
        ),
        Level::new(
            2,
            "Target Market Definition",
            &[
                "Have the target customer segments been defined?",
                "Has the addressable market been sized, even roughly?",
                "Are the buyers and end users of the technology distinguished?",
            ],
        ),
        Level::new(
            3,
            "Value Proposition Formulated",
            &[
                "Is the value proposition stated in terms customers recognise?",
                "Have the main competitors and substitutes been mapped?",
                "Is the differentiation against existing solutions articulated?",
            ],
        ),
        Level::new(
            4,
            "Customer Discovery",
            &[
                "Have structured interviews been held with prospective customers?",
                "Do interview findings confirm the problem and the proposed solution fit?",
                "Has willingness to pay been explored with prospective customers?",
            ],
        ),
        Level::new(
            5,
            "Market Validation",
            &[
                "Has a pricing model been tested with prospective customers?",
                "Are there documented expressions of interest or letters of intent?",
                "Have distribution channels been identified and evaluated?",
            ],
        ),
        Level::new(
            6,
            "Market Entry Strategy",
            &[
                "Is a go-to-market plan with milestones and budget in place?",
                "Have regulatory and certification requirements for market entry been mapped?",
                "Are channel or distribution partners engaged?",
            ],
        ),
        Level::new(
            7,
            "Pilot Market Launch",
            &[
                "Has the offering been sold or piloted with first paying customers?",
                "Are customer feedback loops in place and acted upon?",
                "Are sales and marketing metrics tracked against targets?",
            ],
        ),
        Level::new(
            8,
            "Market Traction",
            &[
                "Is there repeat purchase or recurring revenue from customers?",
                "Are customer acquisition costs and lifetime value known?",
                "Is the sales process repeatable without founder involvement?",
            ],
        ),
        Level::new(
            9,
            "Market Expansion",
            &[
                "Has the offering achieved a sustainable share of its target market?",
                "Are expansion plans for new segments or regions being executed?",
                "Is market performance monitored through established processes?",
            ],
        ),
    ]
}
