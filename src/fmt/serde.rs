/*!
Serde support for [`Instant`].

An `Instant` serializes as its `Display` rendering (RFC 3339 with
microsecond precision and a colon offset) and deserializes through the
ISO reader, so the round trip preserves the absolute moment and the
offset. The zone *identity* is not preserved: a named zone comes back as
the fixed offset in force at that instant.
*/

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::instant::Instant;

impl Serialize for Instant {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Instant {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Instant, D::Error> {
        struct InstantVisitor;

        impl<'de> de::Visitor<'de> for InstantVisitor {
            type Value = Instant;

            fn expecting(
                &self,
                f: &mut core::fmt::Formatter,
            ) -> core::fmt::Result {
                f.write_str("an ISO 8601 datetime string")
            }

            fn visit_str<E: de::Error>(
                self,
                value: &str,
            ) -> Result<Instant, E> {
                Instant::from_iso(value).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(InstantVisitor)
    }
}

#[cfg(test)]
mod tests {
    use crate::{instant::Instant, zone::Zone};

    #[test]
    fn round_trip() {
        let t = Instant::from_civil(2013, 2, 3, 4, 5, 6, 789120, Zone::UTC)
            .unwrap();
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, "\"2013-02-03T04:05:06.789120+00:00\"");
        let back: Instant = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }

    #[test]
    fn named_zone_round_trips_the_moment() {
        let zone = Zone::parse("America/New_York").unwrap();
        let t = Instant::from_civil(2024, 7, 1, 9, 0, 0, 0, zone).unwrap();
        let json = serde_json::to_string(&t).unwrap();
        let back: Instant = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
        assert_eq!(back.utc_offset_seconds(), t.utc_offset_seconds());
    }
}
