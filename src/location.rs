use crate::error::WeatherError;
use crate::transport::HttpTransport;
use crate::weather::Coordinates;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct IpInfo {
    loc: Option<String>,
}

/// Look up the caller's coordinates from their public IP address.
#[tracing::instrument(level = "debug", skip(transport))]
pub async fn resolve_location(
    transport: &HttpTransport,
    url: &str,
) -> Result<Coordinates, WeatherError> {
    let info: IpInfo = transport
        .get_json(url, &[])
        .await
        .map_err(|e| WeatherError::NoLocation(e.to_string()))?;

    let loc = info
        .loc
        .ok_or_else(|| WeatherError::NoLocation("response has no `loc` field".to_string()))?;
    let coords = parse_loc(&loc)?;

    tracing::info!(
        latitude = coords.latitude,
        longitude = coords.longitude,
        "resolved coordinates"
    );
    Ok(coords)
}

/// Parse a `"<lat>,<lon>"` pair.
pub fn parse_loc(loc: &str) -> Result<Coordinates, WeatherError> {
    let malformed = || WeatherError::NoLocation(format!("malformed location {loc:?}"));

    let mut parts = loc.split(',');
    let (Some(lat), Some(lon), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(malformed());
    };

    let latitude: f64 = lat.trim().parse().map_err(|_| malformed())?;
    let longitude: f64 = lon.trim().parse().map_err(|_| malformed())?;

    let coords = Coordinates {
        latitude,
        longitude,
    };
    if !coords.is_valid() {
        return Err(WeatherError::NoLocation(format!(
            "coordinates out of range: {latitude}, {longitude}"
        )));
    }
    Ok(coords)
}
