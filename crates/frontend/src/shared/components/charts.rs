//! Inline SVG charts for the summary dashboard.
//!
//! Three fixed shapes: the monthly-income line, the invoice doughnut and
//! the reservations-by-state bars. Geometry is computed by plain functions
//! so the scaling rules stay testable.

use leptos::prelude::*;

use crate::shared::fmt;

const WIDTH: f64 = 400.0;
const HEIGHT: f64 = 220.0;
const PAD: f64 = 30.0;

const LINE_STROKE: &str = "rgba(75, 192, 192, 1)";
const LINE_FILL: &str = "rgba(75, 192, 192, 0.2)";
const POINT_FILL: &str = "rgba(255, 99, 132, 1)";
const BAR_COLORS: [&str; 3] = ["#4BC0C0", "#FF9F40", "#FF6384"];
const DOUGHNUT_COLORS: [&str; 2] = ["rgba(255, 99, 132, 0.6)", "rgba(54, 162, 235, 0.6)"];

/// Axis ceiling: the largest value with a little headroom, never zero.
pub fn scale_max(values: &[f64]) -> f64 {
    let max = values.iter().cloned().fold(0.0_f64, f64::max);
    if max <= 0.0 {
        1.0
    } else {
        max * 1.1
    }
}

fn x_at(index: usize, count: usize) -> f64 {
    if count <= 1 {
        WIDTH / 2.0
    } else {
        PAD + (WIDTH - 2.0 * PAD) * index as f64 / (count - 1) as f64
    }
}

fn y_at(value: f64, max: f64) -> f64 {
    HEIGHT - PAD - (HEIGHT - 2.0 * PAD) * (value / max)
}

/// `x,y` pairs for the polyline of a series.
pub fn polyline_points(values: &[f64]) -> String {
    let max = scale_max(values);
    values
        .iter()
        .enumerate()
        .map(|(i, v)| format!("{:.1},{:.1}", x_at(i, values.len()), y_at(*v, max)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Fractions (0..=1) of the whole each slice covers.
pub fn slice_fractions(values: &[f64]) -> Vec<f64> {
    let total: f64 = values.iter().map(|v| v.max(0.0)).sum();
    if total <= 0.0 {
        return vec![0.0; values.len()];
    }
    values.iter().map(|v| v.max(0.0) / total).collect()
}

/// SVG path for one doughnut slice between two turn fractions.
pub fn arc_path(start: f64, end: f64) -> String {
    let (cx, cy, r_out, r_in) = (110.0, 110.0, 90.0, 50.0);
    let angle = |f: f64| (f * std::f64::consts::TAU) - std::f64::consts::FRAC_PI_2;
    let (a0, a1) = (angle(start), angle(end.min(start + 0.9999)));
    let large = if end - start > 0.5 { 1 } else { 0 };
    let (x0, y0) = (cx + r_out * a0.cos(), cy + r_out * a0.sin());
    let (x1, y1) = (cx + r_out * a1.cos(), cy + r_out * a1.sin());
    let (x2, y2) = (cx + r_in * a1.cos(), cy + r_in * a1.sin());
    let (x3, y3) = (cx + r_in * a0.cos(), cy + r_in * a0.sin());
    format!(
        "M {x0:.2} {y0:.2} A {r_out} {r_out} 0 {large} 1 {x1:.2} {y1:.2} \
         L {x2:.2} {y2:.2} A {r_in} {r_in} 0 {large} 0 {x3:.2} {y3:.2} Z"
    )
}

#[component]
pub fn LineChart(#[prop(into)] series: Signal<Vec<(String, f64)>>) -> impl IntoView {
    view! {
        <svg
            viewBox=format!("0 0 {WIDTH} {HEIGHT}")
            class="chart chart--line"
            role="img"
        >
            {move || {
                let data = series.get();
                let values: Vec<f64> = data.iter().map(|(_, v)| *v).collect();
                if values.is_empty() {
                    return ().into_any();
                }
                let points = polyline_points(&values);
                let area = format!(
                    "{:.1},{:.1} {} {:.1},{:.1}",
                    x_at(0, values.len()),
                    HEIGHT - PAD,
                    points,
                    x_at(values.len() - 1, values.len()),
                    HEIGHT - PAD,
                );
                let max = scale_max(&values);
                view! {
                    <polygon points=area fill=LINE_FILL />
                    <polyline
                        points=points
                        fill="none"
                        stroke=LINE_STROKE
                        stroke-width="2"
                        stroke-dasharray="5 5"
                    />
                    {data
                        .iter()
                        .enumerate()
                        .map(|(i, (label, v))| {
                            let x = x_at(i, values.len());
                            let y = y_at(*v, max);
                            view! {
                                <circle cx=x cy=y r="4" fill=POINT_FILL stroke="#fff" />
                                <text
                                    x=x
                                    y={HEIGHT - 8.0}
                                    text-anchor="middle"
                                    font-size="9"
                                >
                                    {label.clone()}
                                </text>
                            }
                        })
                        .collect_view()}
                }
                .into_any()
            }}
        </svg>
    }
}

#[component]
pub fn BarChart(#[prop(into)] series: Signal<Vec<(String, f64)>>) -> impl IntoView {
    view! {
        <svg
            viewBox=format!("0 0 {WIDTH} {HEIGHT}")
            class="chart chart--bar"
            role="img"
        >
            {move || {
                let data = series.get();
                if data.is_empty() {
                    return ().into_any();
                }
                let values: Vec<f64> = data.iter().map(|(_, v)| *v).collect();
                let max = scale_max(&values);
                let slot = (WIDTH - 2.0 * PAD) / data.len() as f64;
                let bar_w = slot * 0.6;
                data.iter()
                    .enumerate()
                    .map(|(i, (label, v))| {
                        let x = PAD + slot * i as f64 + (slot - bar_w) / 2.0;
                        let y = y_at(*v, max);
                        let center = x + bar_w / 2.0;
                        let color = BAR_COLORS[i % BAR_COLORS.len()];
                        view! {
                            <rect
                                x=x
                                y=y
                                width=bar_w
                                height={(HEIGHT - PAD) - y}
                                fill=color
                            />
                            <text
                                x=center
                                y={HEIGHT - 8.0}
                                text-anchor="middle"
                                font-size="10"
                            >
                                {label.clone()}
                            </text>
                            <text
                                x=center
                                y={y - 4.0}
                                text-anchor="middle"
                                font-size="10"
                            >
                                {fmt::float(*v)}
                            </text>
                        }
                    })
                    .collect_view()
                    .into_any()
            }}
        </svg>
    }
}

#[component]
pub fn DoughnutChart(#[prop(into)] slices: Signal<Vec<(String, f64)>>) -> impl IntoView {
    view! {
        <div class="chart chart--doughnut">
            <svg viewBox="0 0 220 220" role="img">
                {move || {
                    let data = slices.get();
                    let fractions = slice_fractions(
                        &data.iter().map(|(_, v)| *v).collect::<Vec<_>>(),
                    );
                    let mut start = 0.0;
                    fractions
                        .iter()
                        .enumerate()
                        .filter(|(_, f)| **f > 0.0)
                        .map(|(i, f)| {
                            let path = arc_path(start, start + f);
                            let color = DOUGHNUT_COLORS[i % DOUGHNUT_COLORS.len()];
                            start += f;
                            view! { <path d=path fill=color /> }
                        })
                        .collect_view()
                }}
            </svg>
            <ul class="chart__legend">
                {move || {
                    slices
                        .get()
                        .into_iter()
                        .enumerate()
                        .map(|(i, (label, v))| {
                            let swatch = format!(
                                "background:{}",
                                DOUGHNUT_COLORS[i % DOUGHNUT_COLORS.len()],
                            );
                            view! {
                                <li>
                                    <span class="chart__swatch" style=swatch />
                                    {format!("{}: {}", label, fmt::float(v))}
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_max_adds_headroom_and_never_collapses() {
        assert_eq!(scale_max(&[]), 1.0);
        assert_eq!(scale_max(&[0.0]), 1.0);
        assert!((scale_max(&[100.0]) - 110.0).abs() < 1e-9);
    }

    #[test]
    fn polyline_spans_the_padded_width() {
        let points = polyline_points(&[1.0, 2.0, 3.0]);
        let first = points.split(' ').next().unwrap();
        let last = points.split(' ').next_back().unwrap();
        assert!(first.starts_with("30.0,"));
        assert!(last.starts_with("370.0,"));
    }

    #[test]
    fn fractions_ignore_negatives_and_handle_empty_totals() {
        assert_eq!(slice_fractions(&[0.0, 0.0]), vec![0.0, 0.0]);
        let f = slice_fractions(&[3.0, -1.0, 1.0]);
        assert!((f[0] - 0.75).abs() < 1e-9);
        assert_eq!(f[1], 0.0);
        assert!((f[2] - 0.25).abs() < 1e-9);
    }

    #[test]
    fn arc_path_is_well_formed() {
        let d = arc_path(0.0, 0.25);
        assert!(d.starts_with("M "));
        assert!(d.ends_with('Z'));
        assert_eq!(d.matches('A').count(), 2);
    }
}
