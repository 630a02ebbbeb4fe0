use super::super::domain::{DimensionKind, PathwayAnswerVector, PathwayKind};

/// Complement base for dimensions holding two questions.
pub const DIMENSION_COMPLEMENT_SMALL: i32 = 6;
/// Complement base for dimensions holding three questions.
pub const DIMENSION_COMPLEMENT_LARGE: i32 = 9;

/// Raw Likert sums per dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DimensionTotals {
    pub technology: i32,
    pub market: i32,
    pub business: i32,
    pub regulatory: i32,
    pub team: i32,
    pub strategic: i32,
}

impl DimensionTotals {
    pub fn from_vector(vector: &PathwayAnswerVector) -> Self {
        let sum = |kind| {
            vector
                .dimension_slice(kind)
                .iter()
                .map(|value| i32::from(*value))
                .sum::<i32>()
        };

        Self {
            technology: sum(DimensionKind::Technology),
            market: sum(DimensionKind::Market),
            business: sum(DimensionKind::Business),
            regulatory: sum(DimensionKind::Regulatory),
            team: sum(DimensionKind::Team),
            strategic: sum(DimensionKind::Strategic),
        }
    }

    pub fn get(&self, kind: DimensionKind) -> i32 {
        match kind {
            DimensionKind::Technology => self.technology,
            DimensionKind::Market => self.market,
            DimensionKind::Business => self.business,
            DimensionKind::Regulatory => self.regulatory,
            DimensionKind::Team => self.team,
            DimensionKind::Strategic => self.strategic,
        }
    }
}

pub(crate) fn pathway_score(kind: PathwayKind, totals: &DimensionTotals) -> i32 {
    let DimensionTotals {
        technology,
        market,
        business,
        regulatory,
        team,
        strategic,
    } = *totals;

    match kind {
        PathwayKind::DirectSale => technology + business + market,
        PathwayKind::Licensing => {
            technology + market + (DIMENSION_COMPLEMENT_SMALL - business) + regulatory
        }
        PathwayKind::StartupSpinOut => technology + team + market + strategic,
        PathwayKind::Assignment => {
            technology + (DIMENSION_COMPLEMENT_SMALL - strategic) + (DIMENSION_COMPLEMENT_SMALL - business)
        }
        PathwayKind::ResearchCollaboration => {
            (DIMENSION_COMPLEMENT_LARGE - technology) + team + strategic + market
        }
        PathwayKind::OpenSource => {
            strategic + market + (DIMENSION_COMPLEMENT_SMALL - regulatory) + team
        }
        PathwayKind::GovernmentProcurement => technology + regulatory + market + business,
    }
}
