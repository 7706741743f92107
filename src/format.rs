use crate::amap::{DrivingRoute, Forecast};

pub fn format_weather_forecast(forecast: &Forecast) -> String {
    let casts = forecast
        .casts
        .iter()
        .map(|cast| {
            [
                format!("日期: {} (星期{})", cast.date, cast.week),
                format!(
                    "白天: {}, {}°C, {}风 {}级",
                    cast.dayweather, cast.daytemp, cast.daywind, cast.daypower
                ),
                format!(
                    "夜间: {}, {}°C, {}风 {}级",
                    cast.nightweather, cast.nighttemp, cast.nightwind, cast.nightpower
                ),
                "---".to_string(),
            ]
            .join("\n")
        })
        .collect::<Vec<_>>();

    format!(
        "{} {} ({})\n报告时间: {}\n\n{}",
        forecast.province,
        forecast.city,
        forecast.adcode,
        forecast.reporttime,
        casts.join("\n")
    )
}

/// Renders the first path of a driving plan, or `None` when the provider
/// returned no usable path.
pub fn format_driving_route(
    route: &DrivingRoute,
    origin_label: &str,
    destination_label: &str,
) -> Option<String> {
    let path = route.paths.first()?;

    let mut report = format!(
        "从 {} 到 {}\n总距离: {}公里 | 预计打车费用: {}元\n\n导航指引:",
        origin_label,
        destination_label,
        format_distance_km(&path.distance),
        route.taxi_cost
    );

    for (index, step) in path.steps.iter().enumerate() {
        let road = step
            .road_name
            .as_deref()
            .filter(|name| !name.is_empty());
        let line = match road {
            Some(road_name) => format!(
                "\n{}. 沿{} {} ({}米)",
                index + 1,
                road_name,
                step.instruction,
                step.step_distance
            ),
            None => format!(
                "\n{}. {} ({}米)",
                index + 1,
                step.instruction,
                step.step_distance
            ),
        };
        report.push_str(&line);
    }

    Some(report)
}

// Meters to kilometers at one decimal, half up, so boundary distances
// render deterministically. Unparseable input renders as 0.0.
fn format_distance_km(meters: &str) -> String {
    let meters = meters.parse::<u64>().unwrap_or(0);
    let tenths = meters.saturating_add(50) / 100;
    format!("{}.{}", tenths / 10, tenths % 10)
}
