//! Planning prompt construction.
//!
//! Every itinerary source receives the same instruction text, so command
//! backends and humans pasting into a chat model get itineraries the
//! converter can actually parse.

use crate::trip::TripParams;

/// Build the itinerary-generation prompt for a trip.
pub fn planning_prompt(params: &TripParams) -> String {
    format!(
        "Create a complete, highly detailed travel itinerary for:\n\
         \n\
         Destination: {destination}\n\
         Duration: {num_days} days, starting {start_date}\n\
         Budget: ${budget} USD total\n\
         Preferences: {preferences}\n\
         \n\
         Do not ask any questions. Generate the full itinerary in one\n\
         response, filling any gaps with reasonable assumptions.\n\
         \n\
         Requirements:\n\
         - Organize the schedule under one \"Day N\" heading per day, from\n\
           Day 1 through Day {num_days}.\n\
         - Give every scheduled activity an explicit start and end time on\n\
           its own line, e.g. \"9:00 AM - 11:00 AM Visit the Louvre\".\n\
         - Include specific addresses, opening hours, ticket prices, and\n\
           travel times between locations.\n\
         - Recommend 2-3 accommodation options with nightly prices that fit\n\
           the budget, with distance from the city center.\n\
         - Include a dining plan with restaurants, price ranges, and\n\
           cuisine types.\n\
         - End with practical information: local transport, weather,\n\
           packing, safety, and cultural etiquette.\n\
         - Keep the total estimated cost within the budget.\n\
         \n\
         Use your accommodation-listing and mapping tools for real listings\n\
         and distances where available; otherwise make reasonable estimates.\n",
        destination = params.destination,
        num_days = params.num_days,
        start_date = params.start_date,
        budget = params.budget_usd,
        preferences = params.preferences,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_prompt_contains_every_trip_parameter() {
        let params = TripParams {
            destination: "Lisbon, Portugal".to_string(),
            num_days: 5,
            budget_usd: 1800,
            preferences: "food, fado, viewpoints".to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, 9, 10).unwrap(),
        };

        let prompt = planning_prompt(&params);

        assert!(prompt.contains("Lisbon, Portugal"));
        assert!(prompt.contains("5 days"));
        assert!(prompt.contains("$1800 USD"));
        assert!(prompt.contains("food, fado, viewpoints"));
        assert!(prompt.contains("2024-09-10"));
        // The prompt must ask for the day-heading format the parser expects
        assert!(prompt.contains("\"Day N\" heading"));
    }
}
