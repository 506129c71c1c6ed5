use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "id": 1,
        "name": "Ahmed",
        "email": "ahmed@company.com",
        "employee_id": "EMP-001"
    })
)]
pub struct Employee {
    #[schema(example = 1)]
    pub id: u64,

    #[schema(example = "Ahmed")]
    pub name: String,

    #[schema(example = "ahmed@company.com")]
    pub email: String,

    /// Human-readable employee code, not the primary key.
    #[schema(example = "EMP-001")]
    pub employee_id: String,
}
