//! Template file contents

/// pyproject.toml template for new plugins
pub const PYPROJECT_TOML: &str = r#"[project]
name = "{{plugin_name}}"
version = "0.1.0"
description = {{description_toml}}
readme = "README.md"
requires-python = ">=3.10"
license = {text = "Apache-2.0"}
authors = [
    {{author_toml}}
]
dependencies = [
    "datasette"
]
[dependency-groups]
dev = [
    "pytest",
    "pytest-asyncio"
]

[project.entry-points.datasette]
{{entry_point}} = "{{module_name}}"

[build-system]
requires = ["setuptools>=61.0"]
build-backend = "setuptools.build_meta"
"#;

/// README.md template for new plugins
pub const README_MD: &str = r#"# {{plugin_name}}

{{description}}.

## Installation

```bash
pip install {{plugin_name}}
```

Or install directly from this repository:

```bash
pip install -e .
```

## Usage

This plugin adds [describe functionality here].

## Configuration

Add to your `datasette.yaml`:

```yaml
plugins:
  {{plugin_name}}:
    option1: value1
```

## Development

```bash
pip install -e ".[test]"
pytest
```
"#;

/// Package `__init__.py` with the hook registration stub
pub const MODULE_INIT_PY: &str = r#""""
{{plugin_name}}

{{description}}.
"""

from datasette import hookimpl

__version__ = "0.1.0"


@hookimpl
def prepare_connection(conn):
    """Register custom SQL functions."""
    # Example: Register a custom function
    # conn.create_function("my_function", 1, lambda x: x.upper())
    pass


# Uncomment and customize the hooks you need:

# @hookimpl
# def register_routes():
#     """Register custom URL routes."""
#     return [
#         (r"^/-/my-page$", my_page_view),
#     ]


# async def my_page_view(datasette, request):
#     from datasette import Response
#     return Response.html("<h1>My Custom Page</h1>")


# @hookimpl
# def startup(datasette):
#     """Run on server startup."""
#     async def inner():
#         config = datasette.plugin_config("{{plugin_name}}") or {}
#         # Initialize plugin
#         pass
#     return inner


# @hookimpl
# def menu_links(datasette, actor):
#     """Add items to the navigation menu."""
#     return [
#         {"href": datasette.urls.path("/-/my-page"), "label": "My Feature"}
#     ]


# @hookimpl
# def render_cell(value, column, table, database, datasette, request):
#     """Customize cell rendering in table view."""
#     return None  # Return None to use default rendering
"#;

/// `tests/__init__.py` marks the tests directory as a package
pub const TESTS_INIT_PY: &str = "";

/// Smoke test checking the plugin is registered
pub const TEST_PLUGIN_PY: &str = r#""""Tests for {{plugin_name}}."""

from datasette.app import Datasette
import pytest


@pytest.mark.asyncio
async def test_plugin_is_installed():
    """Test that the plugin is properly installed."""
    datasette = Datasette(memory=True)
    response = await datasette.client.get("/-/plugins.json")
    assert response.status_code == 200
    installed_plugins = {p["name"] for p in response.json()}
    assert "{{plugin_name}}" in installed_plugins


# Add more tests for your plugin functionality:

# @pytest.mark.asyncio
# async def test_custom_route():
#     datasette = Datasette(memory=True)
#     response = await datasette.client.get("/-/my-page")
#     assert response.status_code == 200


# @pytest.mark.asyncio
# async def test_custom_sql_function():
#     datasette = Datasette(memory=True)
#     response = await datasette.client.get(
#         "/_memory.json?sql=select+my_function('test')"
#     )
#     assert response.status_code == 200
"#;

/// pytest.ini enabling automatic async test detection
pub const PYTEST_INI: &str = r"[pytest]
asyncio_mode = auto
";

/// .gitignore template
pub const GITIGNORE: &str = r"__pycache__/
*.py[cod]
*$py.class
*.egg-info/
dist/
build/
.eggs/
*.egg
.pytest_cache/
.coverage
htmlcov/
.venv/
venv/
";
