use super::super::domain::Level;

// Each investment level carries a single canonical check.
pub(super) fn english() -> Vec<Level> {
    vec![
        Level::new(
            1,
            "Market Opportunity Identification",
            &["Is there a clear market opportunity identified for your technology?"],
        ),
        Level::new(
            2,
            "Business Model Formulation",
            &["Has a preliminary business model been developed?"],
        ),
        Level::new(
            3,
            "Market Validation",
            &["Has market validation been conducted with potential customers?"],
        ),
        Level::new(
            4,
            "Business Plan Development",
            &["Is there a detailed business plan with financial projections?"],
        ),
        Level::new(
            5,
            "Management Team Formation",
            &["Has the management team been assembled with relevant expertise?"],
        ),
        Level::new(
            6,
            "Customer Commitment",
            &["Are there initial customer commitments or letters of intent?"],
        ),
        Level::new(
            7,
            "Pilot Validation",
            &["Has pilot testing or beta trials been completed successfully?"],
        ),
        Level::new(
            8,
            "Revenue Generation",
            &["Is there proven revenue generation and scalable business operations?"],
        ),
        Level::new(
            9,
            "Market Success",
            &["Has the venture achieved profitability and market penetration?"],
        ),
    ]
}

pub(super) fn filipino() -> Vec<Level> {
    vec![
        Level::new(
            1,
            "Market Opportunity Identification",
            &["May nakilalang malinaw na market opportunity ba para sa inyong teknolohiya?"],
        ),
        Level::new(
            2,
            "Business Model Formulation",
            &["Nakabuo na ba ng preliminary business model?"],
        ),
        Level::new(
            3,
            "Market Validation",
            &["Naisagawa na ba ang market validation kasama ang mga potensyal na customer?"],
        ),
        Level::new(
            4,
            "Business Plan Development",
            &["May detalyadong business plan ba kasama ang financial projections?"],
        ),
        Level::new(
            5,
            "Management Team Formation",
            &["Nabuo na ba ang management team na may kaukulang expertise?"],
        ),
        Level::new(
            6,
            "Customer Commitment",
            &["May mga initial customer commitments o letters of intent ba?"],
        ),
        Level::new(
            7,
            "Pilot Validation",
            &["Natapos na ba nang matagumpay ang pilot testing o beta trials?"],
        ),
        Level::new(
            8,
            "Revenue Generation",
            &["May napatunayang revenue generation at scalable business operations ba?"],
        ),
        Level::new(
            9,
            "Market Success",
            &["Nakamit na ba ng venture ang profitability at market penetration?"],
        ),
    ]
}
