//! Usage page served for unknown paths

const FAVICON: &str = r#"data:image/svg+xml,<svg xmlns=%22http://www.w3.org/2000/svg%22 viewBox=%220 0 100 100%22><text y=%22.9em%22 font-size=%2290%22>👤</text></svg>"#;

/// Render the usage page with example links rooted at `public_url`
pub fn render(public_url: &str) -> String {
    let twitter = format!("{public_url}/twitter?username=charlyx");
    let twitter_bigger = format!("{twitter}&size=bigger");
    let gravatar = format!("{public_url}/gravatar?email=mon@email");
    let gravatar_sized = format!("{gravatar}&s=200");

    format!(
        r#"<html><head><title>Not found</title><link rel="icon" href="{FAVICON}"></head><body>
<h1>Not found</h1>

<h2>Twitter</h2>
<p>
Give a username and get an avatar in return: <a href="{twitter}">{twitter}</a>
</p>

<p>
You can ask for variant sizings such as "bigger", "mini" and "original" (default size being "normal").
</p>

<p>
Example: <a href="{twitter_bigger}">{twitter_bigger}</a>
</p>

<h2>Gravatar</h2>

<p>
Give an email and get an avatar in return: <a href="{gravatar}">{gravatar}</a>
</p>

<p>
By default, images are presented at 80px by 80px if no size parameter is supplied.<br>
You may request a specific image size from 1px up to 2048px by using the s= or size= parameter and passing a single pixel dimension (since the images are square).
</p>

<p>
Example: <a href="{gravatar_sized}">{gravatar_sized}</a>
</p>
</body>
</html>"#
    )
}
