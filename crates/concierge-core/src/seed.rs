//! Demo records loaded when the dashboard starts.

use chrono::{DateTime, TimeZone, Utc};

use crate::model::{
    Category, Client, ClientId, Message, MessageId, Preferences, Priority, Request, RequestId,
    RequestStatus, Sender,
};

const CLIENT_NAME: &str = "Alexander Sterling";
const CLIENT_EMAIL: &str = "alexander.sterling@example.com";

fn at(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0)
        .single()
        .unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn request(
    id: &str,
    title: &str,
    description: &str,
    category: Category,
    priority: Priority,
    status: RequestStatus,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
    notes: &[&str],
) -> Request {
    Request {
        id: RequestId::new(id),
        title: title.to_string(),
        description: description.to_string(),
        category,
        priority,
        status,
        client_name: CLIENT_NAME.to_string(),
        client_email: CLIENT_EMAIL.to_string(),
        created_at,
        updated_at,
        notes: notes.iter().map(ToString::to_string).collect(),
    }
}

pub fn requests() -> Vec<Request> {
    vec![
        request(
            "req_1",
            "Dinner Reservation",
            "Please book a table for 4 at Le Bernardin for Friday evening at 8 PM.",
            Category::Dining,
            Priority::Normal,
            RequestStatus::Completed,
            at(2025, 7, 23, 0),
            Some(at(2025, 7, 25, 0)),
            &["Reservation confirmed for 8:00 PM", "Table 12 reserved"],
        ),
        request(
            "req_2",
            "Flight Booking",
            "Need first-class tickets to Paris for next month. Flexible dates between 15th-20th.",
            Category::Travel,
            Priority::Urgent,
            RequestStatus::InProgress,
            at(2025, 7, 24, 0),
            Some(at(2025, 7, 26, 0)),
            &[
                "Checking availability with Air France",
                "Found options for 17th and 19th",
            ],
        ),
        request(
            "req_3",
            "Personal Shopping",
            "Looking for a special gift for my wife's birthday. Something elegant from Cartier or Tiffany.",
            Category::Shopping,
            Priority::Normal,
            RequestStatus::Received,
            at(2025, 7, 26, 0),
            None,
            &[],
        ),
    ]
}

pub fn clients() -> Vec<Client> {
    vec![Client {
        id: ClientId::new("user_1"),
        full_name: CLIENT_NAME.to_string(),
        email: CLIENT_EMAIL.to_string(),
        phone_number: "+1 (555) 123-4567".to_string(),
        preferences: Preferences {
            favorite_restaurants: "Le Bernardin, Eleven Madison Park".to_string(),
            preferred_brands: "Herm\u{e8}s, Cartier, Brunello Cucinelli".to_string(),
            travel_notes: "Prefers first-class, non-smoking rooms, late checkout".to_string(),
        },
        total_requests: 3,
        completed_requests: 1,
        vip: true,
    }]
}

pub fn messages() -> Vec<Message> {
    let msg = |id: &str, body: &str, sender: Sender, timestamp: DateTime<Utc>| Message {
        id: MessageId::new(id),
        request_id: RequestId::new("req_2"),
        body: body.to_string(),
        sender,
        timestamp,
    };
    vec![
        msg(
            "msg_1",
            "I need first-class tickets to Paris for next month.",
            Sender::Client,
            at(2025, 7, 24, 10),
        ),
        msg(
            "msg_2",
            "I'll check availability with our preferred airlines. Do you have any specific date preferences?",
            Sender::Admin,
            at(2025, 7, 24, 11),
        ),
        msg(
            "msg_3",
            "Flexible between 15th-20th of next month. Prefer Air France if possible.",
            Sender::Client,
            at(2025, 7, 25, 6),
        ),
        msg(
            "msg_4",
            "Perfect! I found excellent options on the 17th and 19th with Air France. Both have first-class availability. Which would you prefer?",
            Sender::Admin,
            at(2025, 7, 26, 6),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_invariants_hold() {
        let requests = requests();
        let mut ids: Vec<&str> = requests.iter().map(|r| r.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), requests.len());
        for r in &requests {
            assert!(r.last_modified() >= r.created_at, "{}", r.id);
        }
    }

    #[test]
    fn seed_messages_belong_to_flight_booking_in_time_order() {
        let messages = messages();
        assert_eq!(messages.len(), 4);
        assert!(messages.iter().all(|m| m.request_id.as_str() == "req_2"));
        assert!(messages.windows(2).all(|w| w[0].timestamp < w[1].timestamp));
        assert_eq!(messages[0].sender, Sender::Client);
        assert_eq!(messages[3].sender, Sender::Admin);
    }
}
