//! # Canvas Document Template
//!
//! The emitted document is plain HTML with one inline script. The script
//! sizes a `<canvas>`, unpacks the grayscale literals pixel by pixel and
//! writes them back with `putImageData`. Nothing else is loaded at render
//! time.
//!
//! Three placeholders are substituted:
//!
//! | Placeholder | Value |
//! |-------------|-------|
//! | `$width` | Canvas width in pixels |
//! | `$height` | Canvas height in pixels |
//! | `$grayscales` | Packed integers, decimal, joined with `", "` |

use std::io::Write;

use crate::error::Result;

/// Fixed document skeleton.
///
/// The unpacking loop mirrors [`crate::pack::unpack`]: the last bucket may
/// hold fewer than four samples, so the shift is computed from the size of
/// the bucket's group.
pub const TEMPLATE: &str = r#"<!doctype html>
<html>
  <body>
    <canvas id="c"></canvas>
    <script type="text/javascript">
      (function() {
        var canvas = document.getElementById("c");
        var context = canvas.getContext("2d");
        context.canvas.width = $width;
        context.canvas.height = $height;
        if (canvas.width === 0 || canvas.height === 0) {
          return;
        }
        var canvasData = context.getImageData(0, 0, canvas.width, canvas.height);

        var Point = function(x, y) {
          this.x = x;
          this.y = y;
        }

        var setPixel = function(pixel, grayscale) {
          var index = (pixel.x + pixel.y * canvas.width) * 4;
          canvasData.data[index] = grayscale;
          canvasData.data[index + 1] = grayscale;
          canvasData.data[index + 2] = grayscale;
          canvasData.data[index + 3] = 255;
        }

        var packedGrayscales = [$grayscales];

        var pixelCount = canvas.width * canvas.height;
        var mask = (1 << 8) - 1;
        for (var x = 0; x < canvas.width; x++) {
          for (var y = 0; y < canvas.height; y++) {
            var pixel = x + y * canvas.width;
            var bucket = Math.floor(pixel / 4);
            var groupSize = Math.min(4, pixelCount - bucket * 4);
            var grayscale = (packedGrayscales[bucket] >> (groupSize - 1 - pixel % 4) * 8) & mask;
            setPixel(new Point(x, y), grayscale);
          }
        }
        context.putImageData(canvasData, 0, 0);
      })();
    </script>
  </body>
</html>
"#;

/// Separator between packed literals.
pub const LIST_SEPARATOR: &str = ", ";

/// Render the packed integer list as it appears inside the array literal.
pub fn grayscale_list(packed: &[u32]) -> String {
    packed
        .iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(LIST_SEPARATOR)
}

/// Substitute dimensions and packed data into [`TEMPLATE`].
pub fn render(width: u32, height: u32, packed: &[u32]) -> String {
    let document = TEMPLATE
        .replace("$width", &width.to_string())
        .replace("$height", &height.to_string())
        .replace("$grayscales", &grayscale_list(packed));
    log::debug!(
        "Rendered {}x{} document: {} packed values, {} bytes",
        width,
        height,
        packed.len(),
        document.len()
    );
    document
}

/// Render straight into `writer`.
pub fn render_to<W: Write>(writer: &mut W, width: u32, height: u32, packed: &[u32]) -> Result<()> {
    writer.write_all(render(width, height, packed).as_bytes())?;
    writer.flush()?;
    Ok(())
}
