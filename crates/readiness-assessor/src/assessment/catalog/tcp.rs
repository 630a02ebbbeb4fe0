use super::super::domain::{Dimension, DimensionKind, Pathway, PathwayKind};
use super::PathwayCatalog;

pub(super) fn english() -> PathwayCatalog {
    PathwayCatalog {
        dimensions: vec![
            Dimension::new(
                DimensionKind::Technology,
                "Technology & Product Readiness",
                &[
                    "How complete is your technology development status?",
                    "How strong is your technology's value proposition compared to existing solutions?",
                    "How robust is your intellectual property protection strategy?",
                ],
            ),
            Dimension::new(
                DimensionKind::Market,
                "Market & Customer",
                &[
                    "How well-defined is your target market with demonstrated demand?",
                    "How strong is your competitive advantage in the market?",
                    "How adequate is the market size for your commercialization pathway?",
                ],
            ),
            Dimension::new(
                DimensionKind::Business,
                "Business & Financial",
                &[
                    "How capable is your organization to manufacture, market, and sell directly?",
                    "How accessible is the external investment you require?",
                    "How established are your channels for reaching customers?",
                ],
            ),
            Dimension::new(
                DimensionKind::Regulatory,
                "Regulatory & Policy",
                &[
                    "How manageable are the regulatory hurdles for your technology?",
                    "How supportive is the policy environment for your commercialization?",
                ],
            ),
            Dimension::new(
                DimensionKind::Team,
                "Organizational & Team",
                &[
                    "How experienced is your team in product development, sales, and scaling?",
                    "How strong is your organization's capacity to form or support a new company?",
                ],
            ),
            Dimension::new(
                DimensionKind::Strategic,
                "Strategic Fit",
                &[
                    "How aligned is this technology with your organization's core mission?",
                    "How valuable would open-source release be for accelerating adoption?",
                ],
            ),
        ],
        pathways: vec![
            Pathway::new(
                PathwayKind::DirectSale,
                "Direct Sale",
                "Selling the technology directly to end users or customers",
                &[
                    "High technology readiness",
                    "Strong internal resources",
                    "Established market channels",
                ],
            ),
            Pathway::new(
                PathwayKind::Licensing,
                "Licensing",
                "Licensing the technology to other companies for commercialization",
                &["Strong IP protection", "Market demand", "Limited internal resources"],
            ),
            Pathway::new(
                PathwayKind::StartupSpinOut,
                "Startup/Spin-out",
                "Creating a new company to commercialize the technology",
                &[
                    "High innovation potential",
                    "Entrepreneurial team",
                    "Growth market",
                ],
            ),
            Pathway::new(
                PathwayKind::Assignment,
                "Assignment",
                "Selling or transferring technology rights to another organization",
                &["Valuable IP", "Low internal interest", "Better suited for others"],
            ),
            Pathway::new(
                PathwayKind::ResearchCollaboration,
                "Research Collaboration",
                "Partnering with other organizations for further development",
                &[
                    "Early-stage technology",
                    "Need for development",
                    "Research partnerships",
                ],
            ),
            Pathway::new(
                PathwayKind::OpenSource,
                "Open Source",
                "Releasing technology as open source for broad adoption",
                &[
                    "Broad adoption potential",
                    "Service-based value",
                    "Community building",
                ],
            ),
            Pathway::new(
                PathwayKind::GovernmentProcurement,
                "Government Procurement",
                "Targeting government agencies as primary customers",
                &[
                    "Public sector relevance",
                    "Regulatory compliance",
                    "Government needs",
                ],
            ),
        ],
    }
}

pub(super) fn filipino() -> PathwayCatalog {
    PathwayCatalog {
        dimensions: vec![
            Dimension::new(
                DimensionKind::Technology,
                "Technology at Product Readiness",
                &[
                    "Gaano na ka-kompleto ang development status ng inyong teknolohiya?",
                    "Gaano kalakas ang value proposition ng inyong teknolohiya kumpara sa existing solutions?",
                    "Gaano ka-robust ang inyong intellectual property protection strategy?",
                ],
            ),
            Dimension::new(
                DimensionKind::Market,
                "Market at Customer",
                &[
                    "Gaano kalinaw ang inyong target market na may napatunayang demand?",
                    "Gaano kalakas ang inyong competitive advantage sa merkado?",
                    "Sapat ba ang laki ng merkado para sa inyong commercialization pathway?",
                ],
            ),
            Dimension::new(
                DimensionKind::Business,
                "Business at Financial",
                &[
                    "Gaano kakayahan ng inyong organisasyon na mag-manufacture, mag-market, at magbenta nang direkta?",
                    "Gaano kadaling makuha ang external investment na kailangan ninyo?",
                    "Gaano ka-established ang inyong mga channel para maabot ang customers?",
                ],
            ),
            Dimension::new(
                DimensionKind::Regulatory,
                "Regulatory at Policy",
                &[
                    "Gaano kadaling harapin ang mga regulatory hurdle para sa inyong teknolohiya?",
                    "Gaano ka-supportive ang policy environment para sa inyong commercialization?",
                ],
            ),
            Dimension::new(
                DimensionKind::Team,
                "Organizational at Team",
                &[
                    "Gaano ka-experienced ang inyong team sa product development, sales, at scaling?",
                    "Gaano kalakas ang kakayahan ng inyong organisasyon na bumuo o sumuporta ng bagong kumpanya?",
                ],
            ),
            Dimension::new(
                DimensionKind::Strategic,
                "Strategic Fit",
                &[
                    "Gaano ka-aligned ang teknolohiyang ito sa core mission ng inyong organisasyon?",
                    "Gaano kahalaga ang open-source release para mapabilis ang adoption?",
                ],
            ),
        ],
        pathways: vec![
            Pathway::new(
                PathwayKind::DirectSale,
                "Direct Sale",
                "Direktang pagbenta ng teknolohiya sa end users o customers",
                &[
                    "Mataas na technology readiness",
                    "Malakas na internal resources",
                    "Established market channels",
                ],
            ),
            Pathway::new(
                PathwayKind::Licensing,
                "Licensing",
                "Pag-license ng teknolohiya sa ibang kumpanya para sa commercialization",
                &[
                    "Malakas na IP protection",
                    "May demand sa merkado",
                    "Limitadong internal resources",
                ],
            ),
            Pathway::new(
                PathwayKind::StartupSpinOut,
                "Startup/Spin-out",
                "Pagbuo ng bagong kumpanya para i-commercialize ang teknolohiya",
                &[
                    "Mataas na innovation potential",
                    "Entrepreneurial na team",
                    "Lumalagong merkado",
                ],
            ),
            Pathway::new(
                PathwayKind::Assignment,
                "Assignment",
                "Pagbenta o paglipat ng technology rights sa ibang organisasyon",
                &[
                    "Mahalagang IP",
                    "Mababang internal interest",
                    "Mas angkop sa iba",
                ],
            ),
            Pathway::new(
                PathwayKind::ResearchCollaboration,
                "Research Collaboration",
                "Pakikipagtulungan sa ibang organisasyon para sa karagdagang development",
                &[
                    "Early-stage na teknolohiya",
                    "Kailangan pa ng development",
                    "Research partnerships",
                ],
            ),
            Pathway::new(
                PathwayKind::OpenSource,
                "Open Source",
                "Paglabas ng teknolohiya bilang open source para sa malawak na adoption",
                &[
                    "Potensyal sa malawak na adoption",
                    "Service-based na value",
                    "Pagbuo ng komunidad",
                ],
            ),
            Pathway::new(
                PathwayKind::GovernmentProcurement,
                "Government Procurement",
                "Pag-target sa mga ahensya ng gobyerno bilang pangunahing customers",
                &[
                    "Kaugnayan sa public sector",
                    "Regulatory compliance",
                    "Pangangailangan ng gobyerno",
                ],
            ),
        ],
    }
}
