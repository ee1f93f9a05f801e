//! Static calculator page served at `/`

pub const CALCULATOR_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Calculator</title>
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            margin: 0;
            padding: 2rem;
            background-color: #f5f5f5;
        }
        .calculator {
            max-width: 320px;
            margin: 0 auto;
            background: #fff;
            border-radius: 8px;
            padding: 1rem;
            box-shadow: 0 2px 6px rgba(0, 0, 0, 0.15);
        }
        #display {
            width: 100%;
            box-sizing: border-box;
            font-size: 1.5rem;
            text-align: right;
            padding: 0.5rem;
            margin-bottom: 0.75rem;
        }
        .keys {
            display: grid;
            grid-template-columns: repeat(4, 1fr);
            gap: 0.5rem;
        }
        button {
            font-size: 1.2rem;
            padding: 0.75rem;
            border: none;
            border-radius: 4px;
            background-color: #ecf0f1;
            cursor: pointer;
        }
        button.op { background-color: #2c3e50; color: #fff; }
        button.eq { background-color: #27ae60; color: #fff; }
        #error { color: #c0392b; min-height: 1.2rem; margin-top: 0.5rem; }
    </style>
</head>
<body>
    <div class="calculator">
        <input id="display" type="text" autocomplete="off" placeholder="0">
        <div class="keys">
            <button>7</button><button>8</button><button>9</button><button class="op">/</button>
            <button>4</button><button>5</button><button>6</button><button class="op">*</button>
            <button>1</button><button>2</button><button>3</button><button class="op">-</button>
            <button>0</button><button>.</button><button class="eq">=</button><button class="op">+</button>
            <button id="clear">C</button>
        </div>
        <div id="error"></div>
    </div>
    <script>
        const display = document.getElementById('display');
        const errorBox = document.getElementById('error');

        async function evaluate() {
            errorBox.textContent = '';
            const response = await fetch('/calculate', {
                method: 'POST',
                headers: { 'Content-Type': 'application/json' },
                body: JSON.stringify({ equation: display.value })
            });
            const data = await response.json();
            if (response.ok) {
                display.value = data.result;
            } else {
                errorBox.textContent = data.error;
            }
        }

        document.querySelectorAll('.keys button').forEach(button => {
            button.addEventListener('click', () => {
                if (button.id === 'clear') {
                    display.value = '';
                    errorBox.textContent = '';
                } else if (button.classList.contains('eq')) {
                    evaluate();
                } else {
                    display.value += button.textContent;
                }
            });
        });

        display.addEventListener('keydown', event => {
            if (event.key === 'Enter') {
                evaluate();
            }
        });
    </script>
</body>
</html>
"#;
