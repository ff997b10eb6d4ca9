use compute::view::{ChartAxis, TrendChart};
use plotly::common::{AxisSide, Line, LineShape, Mode, Orientation, Title};
use plotly::layout::{Axis, HoverMode, Layout, Legend, Margin};
use plotly::Scatter;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use yew::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly, js_name = newPlot)]
    fn new_plot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue);
}

const CHART_ID: &str = "chart-hormone-trends";

fn traces(chart: &TrendChart) -> Vec<Box<Scatter<u32, f64>>> {
    chart
        .series
        .iter()
        .map(|series| {
            let trace = Scatter::new(chart.days.clone(), series.values.clone())
                .mode(Mode::Lines)
                .name(&series.name)
                .line(Line::new().color(series.color).width(2.0).shape(LineShape::Linear));

            match series.axis {
                ChartAxis::Left => trace,
                ChartAxis::Right => trace.y_axis("y2"),
            }
        })
        .collect()
}

fn layout(chart: &TrendChart) -> Result<serde_json::Value, serde_json::Error> {
    let layout = Layout::new()
        .margin(Margin::new().top(10).right(50).left(50).bottom(40))
        .paper_background_color("rgba(0,0,0,0)")
        .plot_background_color("rgba(0,0,0,0)")
        .hover_mode(HoverMode::XUnified)
        .legend(Legend::new().orientation(Orientation::Horizontal).y(-0.25))
        .x_axis(Axis::new().title(Title::with_text("Cycle Day")).grid_color("#e5e7eb"))
        .y_axis(Axis::new().title(Title::with_text("LH / E3G")).grid_color("#e5e7eb"))
        .y_axis2(
            Axis::new()
                .title(Title::with_text("PdG"))
                .overlaying("y")
                .side(AxisSide::Right)
                .show_grid(false),
        );

    let mut layout = serde_json::to_value(&layout)?;

    if let Some(day) = chart.surge_day {
        layout["shapes"] = serde_json::json!([{
            "type": "line",
            "x0": day,
            "x1": day,
            "y0": 0,
            "y1": 1,
            "xref": "x",
            "yref": "paper",
            "line": {"color": "#8b5cf6", "width": 1, "dash": "dash"}
        }]);
        layout["annotations"] = serde_json::json!([{
            "x": day,
            "y": 1,
            "xref": "x",
            "yref": "paper",
            "text": "LH surge",
            "showarrow": false,
            "yanchor": "bottom"
        }]);
    }

    Ok(layout)
}

fn to_js(value: &serde_json::Value) -> Result<JsValue, serde_wasm_bindgen::Error> {
    value.serialize(&serde_wasm_bindgen::Serializer::json_compatible())
}

fn draw(div_id: &str, chart: &TrendChart) -> Result<(), String> {
    let data = serde_json::to_value(traces(chart)).map_err(|e| e.to_string())?;
    let layout = layout(chart).map_err(|e| e.to_string())?;
    let config = serde_json::json!({"responsive": true, "displayModeBar": false});

    new_plot(
        div_id,
        to_js(&data).map_err(|e| e.to_string())?,
        to_js(&layout).map_err(|e| e.to_string())?,
        to_js(&config).map_err(|e| e.to_string())?,
    );
    Ok(())
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub chart: TrendChart,
}

/// LH and E3G on the left axis, PdG on the right, one point per sample day.
#[function_component(HormoneTrendChart)]
pub fn hormone_trend_chart(props: &Props) -> Html {
    let chart_ref = use_node_ref();

    use_effect_with((chart_ref.clone(), props.chart.clone()), move |(chart_ref, chart)| {
        if let Some(element) = chart_ref.cast::<Element>() {
            let div_id = element.id();
            if !div_id.is_empty() {
                log::trace!("Drawing hormone chart with {} days", chart.days.len());
                if let Err(err) = draw(&div_id, chart) {
                    log::warn!("Skipping hormone chart: {}", err);
                }
            }
        }
        || ()
    });

    html! {
        <div ref={chart_ref} id={CHART_ID} class="chart-container w-full h-72 md:h-96"></div>
    }
}
