use crate::amap::AmapClient;

// Lookup tiers for city-code resolution, tried in order until one yields
// a candidate. Coordinates use the geocoder only.
const CITY_CODE_TIERS: &[CityCodeTier] = &[CityCodeTier::Geocode, CityCodeTier::District];

#[derive(Debug, Clone, Copy)]
enum CityCodeTier {
    Geocode,
    District,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPlace {
    pub location: String,
    pub label: String,
}

#[derive(Debug, Clone)]
pub struct Resolver {
    client: AmapClient,
}

impl Resolver {
    pub fn new(client: AmapClient) -> Self {
        Self { client }
    }

    pub async fn resolve_city_code(&self, name: &str) -> Option<String> {
        for tier in CITY_CODE_TIERS {
            if let Some(adcode) = self.city_code_from(*tier, name).await {
                return Some(adcode);
            }
        }
        None
    }

    async fn city_code_from(&self, tier: CityCodeTier, name: &str) -> Option<String> {
        match tier {
            CityCodeTier::Geocode => {
                let response = self.client.geocode(name).await.ok()?;
                if response.status != "1" {
                    return None;
                }
                response.geocodes.first().map(|g| g.adcode.clone())
            }
            CityCodeTier::District => {
                let response = self.client.district(name).await.ok()?;
                if response.status != "1" {
                    return None;
                }
                response.districts.first().map(|d| d.adcode.clone())
            }
        }
    }

    pub async fn resolve_coordinate(&self, name: &str) -> Option<ResolvedPlace> {
        let response = self.client.geocode(name).await.ok()?;
        if response.status != "1" {
            return None;
        }
        response.geocodes.first().map(|geocode| ResolvedPlace {
            location: geocode.location.clone(),
            label: geocode.formatted_address.clone(),
        })
    }
}
