//! Chart-ready report emission.
//!
//! Pure formatting of already-computed sweep rows: a Google-chart data table
//! (one `[alignment, t, ...]` row per alignment), optionally wrapped in the
//! HTML/JS boilerplate that renders it as a line chart. Writes through any
//! `io::Write` sink so the output is testable.

use std::io::{self, Write};

use crate::registry::ResultRow;

const HTML_PREAMBLE: &str = "<html>\n\
  <head>\n\
    <script type=\"text/javascript\" src=\"https://www.google.com/jsapi\"></script>\n\
    <script type=\"text/javascript\">\n\
      google.load(\"visualization\", \"1\", {packages:[\"corechart\"]});\n\
      google.setOnLoadCallback(drawChart);\n\
      function drawChart() {\n\
        var data = google.visualization.arrayToDataTable([\n";

const HTML_POSTAMBLE: &str = "        ]);\n\
        var options = {\n\
          title: 'Alignment vs. Run Time'\n\
        };\n\
        var chart = new google.visualization.LineChart(document.getElementById('chart_div'));\n\
        chart.draw(data, options);\n\
      }\n\
    </script>\n\
  </head>\n\
  <body>\n\
    <div id=\"chart_div\" style=\"width: 900px; height: 500px;\"></div>\n\
  </body>\n\
</html>\n";

/// Write the data table: a header row of quoted column literals followed by
/// one row per alignment. With `html` set, the table is wrapped in the chart
/// page boilerplate.
pub fn write_chart<W: Write>(
    out: &mut W,
    columns: &[&str],
    rows: &[ResultRow],
    html: bool,
) -> io::Result<()> {
    if html {
        out.write_all(HTML_PREAMBLE.as_bytes())?;
    }

    write!(out, "[")?;
    for (i, column) in columns.iter().enumerate() {
        if i > 0 {
            write!(out, ",")?;
        }
        write!(out, "'{}'", column)?;
    }
    for row in rows {
        write!(out, "],\n[{}", row.alignment)?;
        for t in &row.times {
            write!(out, ",{}", t)?;
        }
    }
    writeln!(out, "]")?;

    if html {
        out.write_all(HTML_POSTAMBLE.as_bytes())?;
    }
    Ok(())
}
