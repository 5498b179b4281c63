use crate::model::ExternalContext;
use crate::registry::{CommandInput, CommandOutput};

use super::common;

pub fn assign_vehicle(_input: &CommandInput<'_>, _ctx: &ExternalContext) -> CommandOutput {
    common::coming_soon("Vehicle assignment")
}

pub fn vehicle_status(input: &CommandInput<'_>, ctx: &ExternalContext) -> CommandOutput {
    let id = input.args();
    if id.is_empty() {
        return common::usage(input.name, "id");
    }
    let Some(vehicle) = ctx.find_vehicle(id) else {
        return common::not_found("Vehicle", id, None);
    };

    let mut lines = vec![
        format!("Vehicle {} ({})", vehicle.id, vehicle.kind.label()),
        format!("- Status: {}", vehicle.status.label()),
        format!("- Battery: {}%", vehicle.battery),
        format!("- Location: {}", vehicle.location),
    ];
    if let Some(task) = &vehicle.current_task {
        lines.push(format!("- Task: {task}"));
    }
    CommandOutput::text(lines.join("\n"))
}

pub fn optimize_routes(_input: &CommandInput<'_>, _ctx: &ExternalContext) -> CommandOutput {
    common::coming_soon("Route optimization")
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::model::{Vehicle, VehicleKind, VehicleStatus};

    fn ctx() -> ExternalContext {
        ExternalContext {
            vehicles: vec![Vehicle {
                id: "3".into(),
                kind: VehicleKind::Robot,
                status: VehicleStatus::Active,
                battery: 75,
                location: "Zone A1 - Picking".into(),
                current_task: Some("Order Picking #1234".into()),
                last_maintenance: None,
                efficiency: 88,
                mileage: 300,
                assigned_warehouse: "Warehouse A".into(),
            }],
            ..ExternalContext::default()
        }
    }

    #[test]
    fn reports_vehicle() {
        let out = vehicle_status(&CommandInput::new("vehicle status 3", "vehicle status"), &ctx());
        assert_eq!(
            out.message,
            "Vehicle 3 (robot)\n- Status: active\n- Battery: 75%\n- Location: Zone A1 - Picking\n- Task: Order Picking #1234"
        );
    }

    #[test]
    fn unknown_and_missing_vehicle() {
        let out = vehicle_status(&CommandInput::new("vehicle status 42", "vehicle status"), &ctx());
        assert_eq!(out.message, "Vehicle \"42\" not found.");
        let out = vehicle_status(&CommandInput::new("vehicle status", "vehicle status"), &ctx());
        assert_eq!(out.message, "Usage: vehicle status <id>");
    }

    #[test]
    fn placeholders_request_nothing() {
        let input = CommandInput::new("optimize routes", "optimize routes");
        assert_eq!(optimize_routes(&input, &ctx()).message, "Route optimization is coming soon.");
        let input = CommandInput::new("assign vehicle", "assign vehicle");
        assert!(assign_vehicle(&input, &ctx()).effect.is_none());
    }
}
