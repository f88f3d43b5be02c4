//! Canned answers used when no chat provider is configured or reachable.
//!
//! Matching is keyword based and order sensitive: groups are checked top to
//! bottom and the first hit wins, so service-specific groups sit above the
//! generic pricing group ("how much is waxing?" must answer waxing, not the
//! generic price overview).

const HOURS: &str = "We're open Monday to Saturday, 11:00 AM to 6:00 PM, and closed on Sundays. \
    Walk-ins are welcome, or call us on +44 7368 594210 to book ahead!";

const THREADING: &str = "Our threading prices: Eye Brow £5, Upper Lip £3, Chin £3, Forehead £3, \
    Neck £3, Side Face £5, and Full Face £15.";

const WAXING: &str = "Our waxing prices: face waxing from £4 (Eye Brows £6, Upper Lip £4, \
    Full Face £18) and body waxing from £8 (Half Arm £12, Full Arm £18, Under Arm £8, \
    Half Leg £15, Full Leg £25, Full Body except bikini £60).";

const NAILS: &str = "We offer Pedicure for £25 and Manicure for £20, plus eyelash services: \
    Full Set Cluster from £18, Party Lashes £8, and tinting from £6.";

const FACIAL: &str = "Our facial and massage services: Mini Facial £15, Full Facial \
    (Cleansing/Whitening/Gold) £25, Herbal Facial £30, and Head Massage £15.";

const MAKEUP: &str = "We offer Party Makeup from £30 and Bridal Makeup from £150. \
    Our artists would love to get you ready for your special day!";

const HENNA: &str = "Henna: One Hand or Foot from £5, Both Hands or Feet from £10. \
    We also do Hair Trimming £7, other cuts from £12, and children's cuts (under 10) £10.";

const LOCATION: &str = "You'll find us at 21-23 Woodgrange Road, London E7 8BA. \
    Come visit us!";

const BOOKING: &str = "To book an appointment, call us on +44 7368 594210 or drop by at \
    21-23 Woodgrange Road, London E7 8BA. We're open Monday to Saturday, 11:00 AM to 6:00 PM.";

const PRICING: &str = "Our prices start from £3 for threading, waxing from £4, facials from £15, \
    manicure £20, pedicure £25, and makeup from £30. Ask me about a specific service for the \
    full price list!";

const GREETING: &str = "Hello! I'm your beauty assistant. I can help you with beauty tips and \
    provide information about our salon at 21-23 Woodgrange Road, London E7 8BA. Our opening \
    hours are Monday-Saturday 11:00 AM to 6:00 PM. How can I help you today?";

const KEYWORD_GROUPS: &[(&[&str], &str)] = &[
    (&["hour", "open", "close", "timing"], HOURS),
    (&["thread", "eyebrow", "eye brow"], THREADING),
    (&["wax"], WAXING),
    (&["nail", "manicure", "pedicure", "lash"], NAILS),
    (&["facial", "massage"], FACIAL),
    (&["makeup", "make up", "bridal"], MAKEUP),
    (&["henna", "mehndi", "hair"], HENNA),
    (&["where", "location", "address", "direction"], LOCATION),
    (&["book", "appointment", "reserve"], BOOKING),
    (&["price", "cost", "how much", "charge"], PRICING),
];

/// Total over all inputs: always returns one of the canned responses.
pub fn respond(message: &str) -> &'static str {
    let message = message.to_lowercase();
    for (keywords, response) in KEYWORD_GROUPS {
        if keywords.iter().any(|keyword| message.contains(keyword)) {
            return response;
        }
    }
    GREETING
}

#[cfg(test)]
mod tests {
    use super::respond;

    #[test]
    fn test_hours() {
        assert!(respond("What are your hours?").contains("11:00 AM to 6:00 PM"));
    }

    #[test]
    fn test_waxing_wins_over_pricing() {
        // Contains a pricing keyword, but the waxing group is checked first.
        let reply = respond("How much is waxing?");
        assert!(reply.contains("waxing prices"));
        assert!(reply.contains("£60"));
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(respond("WAXING"), respond("waxing"));
    }

    #[test]
    fn test_nails() {
        assert!(respond("do you do pedicure?").contains("£25"));
    }

    #[test]
    fn test_location() {
        assert!(respond("where are you based?").contains("Woodgrange Road"));
    }

    #[test]
    fn test_generic_pricing() {
        assert!(respond("what do you charge?").contains("full price list"));
    }

    #[test]
    fn test_unmatched_falls_back_to_greeting() {
        let reply = respond("tell me a joke");
        assert!(reply.contains("beauty assistant"));
        assert!(reply.contains("Woodgrange Road"));
    }

    #[test]
    fn test_empty_message() {
        assert!(respond("").contains("beauty assistant"));
    }
}
