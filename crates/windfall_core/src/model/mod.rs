mod assets;
mod profiles;
mod results;
mod series;
mod window;

pub use assets::{AssetCatalog, AssetClassId};
pub use profiles::RiskProfile;
pub use results::{ComparisonRow, ComparisonTable};
pub use series::{ReturnRecord, ReturnSeries};
pub use window::RollingWindow;
