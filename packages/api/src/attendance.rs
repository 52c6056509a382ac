//! Attendance record endpoints: the user's claims of having been at games.

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::types::{
    Attendance, AttendanceCreate, AttendanceStats, AttendanceUpdate, BulkAttendanceRequest,
    BulkAttendanceResponse,
};

impl ApiClient {
    /// Mark a game as attended. Duplicate marks are rejected by the server
    /// with a detail message.
    pub async fn create_attendance(
        &self,
        body: &AttendanceCreate,
    ) -> Result<Attendance, ApiError> {
        self.post_json("/attendance/", body).await
    }

    /// Mark several games at once; already-attended games are skipped.
    pub async fn bulk_create_attendance(
        &self,
        body: &BulkAttendanceRequest,
    ) -> Result<BulkAttendanceResponse, ApiError> {
        self.post_json("/attendance/bulk", body).await
    }

    /// The current user's attendance records, each embedding its game.
    pub async fn list_attendance(&self) -> Result<Vec<Attendance>, ApiError> {
        self.get_json("/attendance/", &[]).await
    }

    /// Aggregate counts by team and season, plus stadiums/states visited.
    pub async fn attendance_stats(&self) -> Result<AttendanceStats, ApiError> {
        self.get_json("/attendance/stats", &[]).await
    }

    pub async fn update_attendance(
        &self,
        id: i64,
        body: &AttendanceUpdate,
    ) -> Result<Attendance, ApiError> {
        self.patch_json(&format!("/attendance/{id}"), body).await
    }

    pub async fn delete_attendance(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/attendance/{id}")).await
    }
}
