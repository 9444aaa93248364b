//! `help` and the verbs the bot does not offer

/// Reply to `schedules`
pub(super) const NOT_IMPLEMENTED_REPLY: &str = "Not implemented yet";

/// Usage text, also shown for unknown verbs
pub(super) fn help_text(trigger: &str) -> String {
    format!(
        "run:\n\
         {trigger} agencies - to list all agencies\n\
         {trigger} prediction <AgencyID> <RouteID> <StopID> - to get the prediction for the next bus for the specific route\n\
         {trigger} routes <AgencyID> - to get the routes for the specific agency\n\
         {trigger} stops <AgencyID> <RouteID> - to list all stops for a specific route\n\
         {trigger} schedules - {NOT_IMPLEMENTED_REPLY}"
    )
}
